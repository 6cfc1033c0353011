// src/error.rs
//! Error types shared by input loading, profile sources and export.

/// Error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A profile source could not produce a record for a valid URL.
    #[error("Extraction failed for {url}: {reason}")]
    Extraction { url: String, reason: String },

    /// Bulk input could not be turned into a URL list.
    #[error("Input error: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Spreadsheet read error: {0}")]
    Workbook(#[from] calamine::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
