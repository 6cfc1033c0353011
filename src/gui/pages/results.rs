// src/gui/pages/results.rs
use eframe::egui::{self, RichText};

use super::{no_results, Page};
use crate::gui::{
    app::App,
    components::{data_table, export_bar, metrics},
};

pub struct ResultsPage;
pub static PAGE: ResultsPage = ResultsPage;

impl Page for ResultsPage {
    fn title(&self) -> &'static str { "Results" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Results & Export");

        let Some(results) = &app.results else {
            no_results(ui, "No results to display. Please process some profiles first.");
            return;
        };

        let view = results.all();
        metrics::draw_summary(ui, &view.summary());
        ui.separator();
        metrics::draw_cert_analysis(ui, &view);

        ui.separator();
        export_bar::draw(ui, app);
        ui.separator();

        let Some(results) = &app.results else { return };
        ui.label(RichText::new("Data Preview").strong());
        data_table::draw(ui, "results_table", &results.all());
    }
}
