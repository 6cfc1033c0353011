// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub process: ProcessOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Artificial pause per valid URL; 0 disables it.
    pub pause_ms: u64,
    /// Fixed seed for the sample source; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Keep only HR-related rows after a pass.
    pub hr_only: bool,
    /// Keep only rows that carry a certification after a pass.
    pub certified_only: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            pause_ms: REQUEST_PAUSE_MS,
            seed: None,
            hr_only: false,
            certified_only: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Xlsx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Xlsx];

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Field separator for delimited formats; `None` for the spreadsheet.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Xlsx => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
            ExportFormat::Xlsx => "Excel",
        }
    }

    /// Guess from a file extension (case-insensitive).
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" | "tab" => Some(ExportFormat::Tsv),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    dir: PathBuf,
    /// File name without extension. `None` → timestamped default.
    file_stem: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: None,
        }
    }
}

impl ExportOptions {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_stem(&self) -> Option<&str> {
        self.file_stem.as_deref()
    }

    /// Final output path for a given moment. The extension always follows `format`.
    pub fn out_path_at(&self, now: DateTime<Local>) -> PathBuf {
        let stem = match &self.file_stem {
            Some(stem) => stem.clone(),
            None => default_file_stem(now),
        };
        self.dir.join(format!("{stem}.{}", self.format.ext()))
    }

    pub fn out_path(&self) -> PathBuf {
        self.out_path_at(Local::now())
    }

    /// Path as shown in the GUI output field; the timestamp stays a placeholder.
    pub fn display_path(&self) -> String {
        let stem = match &self.file_stem {
            Some(stem) => stem.clone(),
            None => format!("{DEFAULT_FILE_PREFIX}_<timestamp>"),
        };
        self.dir
            .join(format!("{stem}.{}", self.format.ext()))
            .to_string_lossy()
            .into_owned()
    }

    /// Parse user text into dir + stem.
    /// - trailing separator or existing dir → directory only, timestamped name
    /// - recognised extension → also switches `format`
    /// - empty → back to defaults
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.dir = PathBuf::from(DEFAULT_OUT_DIR);
            self.file_stem = None;
            return;
        }

        let p = PathBuf::from(crate::file::normalize_separators(s));
        if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            self.dir = p;
            self.file_stem = None;
            return;
        }

        self.dir = match p.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if let Some(fmt) = p
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ExportFormat::from_ext)
        {
            self.format = fmt;
        }
        self.file_stem = p
            .file_stem()
            .map(|stem| crate::core::sanitize::sanitize_file_stem(&stem.to_string_lossy()))
            .filter(|stem| !stem.is_empty());
    }
}

/// `linkedin_profiles_YYYYmmdd_HHMMSS`
pub fn default_file_stem(now: DateTime<Local>) -> String {
    format!("{DEFAULT_FILE_PREFIX}_{}", now.format(TIMESTAMP_FMT))
}
