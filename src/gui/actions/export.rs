// src/gui/actions/export.rs
use crate::{file, gui::app::App};

use super::current_results;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
        app.refresh_out_path_text();
        logf!("Export: Out path set → {}", app.out_path_text);
    }

    let status_msg = match current_results(app) {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(results) => {
            let export = &app.state.options.export;
            logf!("Export: Begin rows={} format={:?}", results.len(), export.format);
            match file::write_export(export, results.rows()) {
                Ok(path) => {
                    logf!("Export: OK {}", path.display());
                    format!("Exported {} rows to {}", results.len(), path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    app.status(status_msg);
}
