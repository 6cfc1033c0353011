// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load_input, process, poll, export, copy}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod load;    // src/gui/actions/load.rs
mod process; // src/gui/actions/process.rs

pub use copy::copy;
pub use export::export;
pub use load::{clear_input, load_input};
pub use process::{collect_urls, poll, process};

use crate::{data::ResultSet, gui::app::App};

#[inline]
pub(super) fn current_results(app: &App) -> Option<&ResultSet> {
    app.results.as_ref().filter(|r| !r.is_empty())
}
