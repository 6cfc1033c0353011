// src/gui/components/data_table.rs
//
// Draws a result table over a SelectionView. Purely a view.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{data::SelectionView, profile::OutputRow};

/// Initial widths in `OutputRow::HEADERS` order.
const COLUMN_WIDTHS: [f32; 12] = [
    260.0, 130.0, 110.0, 210.0, 90.0, 70.0, 100.0, 100.0, 150.0, 210.0, 130.0, 140.0,
];

const HR_YES: Color32 = Color32::from_rgb(0x5A, 0xC8, 0x78);
const HR_NO: Color32 = Color32::from_rgb(0x9A, 0x9A, 0x9A);

pub fn draw(ui: &mut egui::Ui, id_salt: &str, view: &SelectionView<'_>) {
    if view.is_empty() {
        ui.label(RichText::new("No rows match.").italics());
        return;
    }

    super::solid_scroll_bars(ui);

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt((id_salt, "hscroll"))
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(id_salt)
                .striped(true)
                .min_scrolled_height(0.0);
            for w in COLUMN_WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in OutputRow::HEADERS {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, view.len(), |mut row| {
                        let Some(data) = view.row(row.index()) else { return };
                        for (ci, cell) in data.to_cells().into_iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(cell);
                                if ci == OutputRow::HR_COL {
                                    rt = rt.color(if data.is_hr_related { HR_YES } else { HR_NO });
                                    ui.centered_and_justified(|ui| { ui.label(rt); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                }
                            });
                        }
                    });
                });
        });
}
