// src/config/state.rs
use super::options::AppOptions;

/// Search-tab inputs. Only affects the Search view, never the stored results.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub name: String,
    pub company: String,
    /// `None` = "All"
    pub certification: Option<String>,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Manual URL box, one per line
    pub manual_urls: String,

    /// Upload: path text + chosen URL column
    pub input_path: String,
    pub input_column: Option<usize>,

    pub search: SearchState,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            manual_urls: s!(),
            input_path: s!(),
            input_column: None,
            search: SearchState::default(),
            window_w: 1200,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
