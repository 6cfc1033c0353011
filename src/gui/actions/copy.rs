// src/gui/actions/copy.rs
use eframe::egui;

use crate::{delimited, gui::app::App};

use super::current_results;

/// Copy the result rows as delimited text. Spreadsheet format copies as CSV.
pub fn copy(app: &mut App, ctx: &egui::Context) {
    let status_msg = match current_results(app) {
        None => {
            logd!("Copy: Clicked, but there's nothing to copy");
            s!("Nothing to copy")
        }
        Some(results) => {
            let export = &app.state.options.export;
            let delim = export.format.delimiter().unwrap_or(b',');
            match delimited::to_export_string(results.rows(), export.include_headers, delim) {
                Ok(txt) => {
                    logf!("Copy: rows={} bytes={}", results.len(), txt.len());
                    ctx.copy_text(txt);
                    s!("Copied to clipboard")
                }
                Err(e) => {
                    loge!("Copy: Error: {}", e);
                    format!("Copy error: {e}")
                }
            }
        }
    };

    app.status(status_msg);
}
