// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{gui::app::App, input::InputTable};

pub fn load_input(app: &mut App) {
    let text = app.state.gui.input_path.trim();
    if text.is_empty() {
        app.status("Enter a CSV, TSV, XLSX or TXT path first");
        return;
    }
    let path = PathBuf::from(crate::file::normalize_separators(text));

    match InputTable::load(&path) {
        Ok(table) => {
            let col = table.guess_url_column();
            logf!(
                "Input: Loaded {} rows={} cols={} url_col={}",
                path.display(), table.rows.len(), table.ncols(), col
            );
            app.status(format!("Loaded {} rows from {}", table.rows.len(), path.display()));
            app.state.gui.input_column = Some(col);
            app.input_table = Some(table);
        }
        Err(e) => {
            loge!("Input: Error reading {}: {}", path.display(), e);
            app.status(format!("Error reading file: {e}"));
            app.input_table = None;
            app.state.gui.input_column = None;
        }
    }
}

pub fn clear_input(app: &mut App) {
    app.input_table = None;
    app.state.gui.input_column = None;
    logd!("Input: Cleared loaded file");
}
