// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::app::App;

pub mod upload;
pub mod search;
pub mod results;

pub trait Page: Send + Sync + 'static {
    /// Tab label.
    fn title(&self) -> &'static str;

    /// Draw the tab body below the tab strip.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

/// Shown by tabs that need a finished pass.
pub(super) fn no_results(ui: &mut egui::Ui, msg: &str) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new(msg).italics());
}
