// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let status = app.status_snapshot();
    ui.horizontal(|ui| {
        if app.running() {
            ui.spinner();
        }
        ui.label(format!("Status: {}", status.text));
    });
}
