// src/gui/pages/search.rs
use eframe::egui::{self, RichText};

use super::{no_results, Page};
use crate::{
    data::RowFilter,
    gui::{app::App, components::data_table},
    profile::catalog,
};

pub struct SearchPage;
pub static PAGE: SearchPage = SearchPage;

impl Page for SearchPage {
    fn title(&self) -> &'static str { "Search Profiles" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Search Profiles");

        if app.results.is_none() {
            no_results(ui, "No processed data available. Please process some profiles first.");
            return;
        }

        let search = &mut app.state.gui.search;
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.add(egui::TextEdit::singleline(&mut search.name).desired_width(160.0));
            ui.label("Company:");
            ui.add(egui::TextEdit::singleline(&mut search.company).desired_width(160.0));

            let shown = search.certification.clone().unwrap_or_else(|| s!("All"));
            egui::ComboBox::from_label("Certification")
                .selected_text(shown)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut search.certification, None, "All");
                    for code in catalog::codes() {
                        ui.selectable_value(&mut search.certification, Some(s!(code)), code);
                    }
                });
        });

        let filter = RowFilter::search(&search.name, &search.company, search.certification.as_deref());
        let Some(results) = &app.results else { return };
        let view = results.view(&filter);

        ui.add_space(4.0);
        ui.label(RichText::new(format!("Search Results ({} rows)", view.len())).strong());
        data_table::draw(ui, "search_table", &view);
    }
}
