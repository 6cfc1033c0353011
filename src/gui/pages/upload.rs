// src/gui/pages/upload.rs
use eframe::egui::{self, RichText};

use super::Page;
use crate::gui::{actions, app::App, progress::Status};

pub struct UploadPage;
pub static PAGE: UploadPage = UploadPage;

const PREVIEW_ROWS: usize = 5;

impl Page for UploadPage {
    fn title(&self) -> &'static str { "Upload & Process" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        egui::ScrollArea::vertical()
            .id_salt("upload_scroll")
            .show(ui, |ui| {
                ui.heading("Upload Profile URLs");
                ui.add_space(4.0);

                file_section(ui, app);

                ui.add_space(8.0);
                ui.label("Or enter URLs manually (one per line):");
                ui.add_enabled(
                    app.input_table.is_none(),
                    egui::TextEdit::multiline(&mut app.state.gui.manual_urls)
                        .hint_text("https://www.linkedin.com/in/username")
                        .desired_rows(6)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );

                ui.add_space(8.0);
                let running = app.running();
                ui.horizontal(|ui| {
                    if ui.add_enabled(!running, egui::Button::new("Start Processing")).clicked() {
                        actions::process(app);
                    }
                    let pending = actions::collect_urls(app).len();
                    ui.label(format!("{pending} URL(s) queued"));
                });

                if running {
                    progress_bar(ui, &app.status_snapshot());
                }

                last_run(ui, app);
            });
    }
}

fn file_section(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("File (CSV, TSV, XLSX or TXT):");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.input_path)
                .desired_width(320.0)
                .font(egui::TextStyle::Monospace),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || submitted {
            actions::load_input(app);
        }
        if app.input_table.is_some() && ui.button("Clear").clicked() {
            actions::clear_input(app);
        }
    });

    let Some(table) = &app.input_table else { return };

    ui.add_space(4.0);
    ui.label(RichText::new("File Preview").strong());
    egui::Grid::new("input_preview")
        .striped(true)
        .show(ui, |ui| {
            for h in &table.headers {
                ui.label(RichText::new(h).strong());
            }
            ui.end_row();
            for row in table.preview(PREVIEW_ROWS) {
                for cell in row {
                    ui.label(cell);
                }
                ui.end_row();
            }
        });

    let selected = app
        .state
        .gui
        .input_column
        .and_then(|i| table.headers.get(i))
        .cloned()
        .unwrap_or_default();
    egui::ComboBox::from_label("Column containing LinkedIn URLs")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for (i, h) in table.headers.iter().enumerate() {
                ui.selectable_value(&mut app.state.gui.input_column, Some(i), h);
            }
        });
}

fn progress_bar(ui: &mut egui::Ui, status: &Status) {
    ui.add(
        egui::ProgressBar::new(status.fraction())
            .text(format!("Processing profile {} of {}", status.done, status.total)),
    );
}

fn last_run(ui: &mut egui::Ui, app: &App) {
    let Some(run) = &app.last_run else { return };

    ui.add_space(8.0);
    ui.separator();
    ui.label(RichText::new("Last run").strong());
    if run.invalid > 0 {
        ui.label(format!("Found {} invalid LinkedIn URLs (skipped)", run.invalid));
    }
    ui.label(format!("Profiles processed: {}", run.processed));
    ui.label(format!("Rows kept: {}", run.rows));
    for failure in &run.failures {
        ui.colored_label(egui::Color32::from_rgb(0xDC, 0x61, 0x49), format!("Error processing {failure}"));
    }
}
