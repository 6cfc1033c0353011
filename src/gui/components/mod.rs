// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod metrics;
pub mod sidebar;
pub mod status_bar;
pub mod tabs;

use eframe::egui;

/// Scroll bars reserve space instead of floating over content.
pub(crate) fn solid_scroll_bars(ui: &mut egui::Ui) {
    let s = &mut ui.style_mut().spacing.scroll;
    s.floating = false;
    s.bar_width = 10.0;
    s.bar_inner_margin = 4.0;
    s.bar_outer_margin = 0.0;
    s.handle_min_length = 48.0;
    s.foreground_color = true;
    let visuals = &mut ui.style_mut().visuals;
    visuals.extreme_bg_color = visuals.panel_fill;
}
