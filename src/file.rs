// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook};

use crate::config::consts::{PROFILES_SHEET, SUMMARY_SHEET};
use crate::config::options::ExportOptions;
use crate::data::Summary;
use crate::delimited;
use crate::error::{Error, Result};
use crate::profile::OutputRow;

/// Write one export file based on ExportOptions (path, headers policy, format).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, rows: &[OutputRow]) -> Result<PathBuf> {
    write_export_at(export, rows, Local::now())
}

/// Same as `write_export`, with the timestamp for default file names pinned.
pub fn write_export_at(
    export: &ExportOptions,
    rows: &[OutputRow],
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let path = export.out_path_at(now);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    match export.format.delimiter() {
        Some(delim) => write_delimited_file(&path, rows, export.include_headers, delim)?,
        None => write_workbook(&path, rows)?,
    }
    logf!("Export: Wrote {} rows → {}", rows.len(), path.display());
    Ok(path)
}

/// Create/truncate `path` and write rows as CSV/TSV.
pub fn write_delimited_file(
    path: &Path,
    rows: &[OutputRow],
    include_headers: bool,
    delim: u8,
) -> Result<()> {
    let out = BufWriter::new(File::create(path)?);
    delimited::write_rows(out, rows, include_headers, delim)
}

/// Two-sheet workbook: the rows (with header) and the four summary counts.
pub fn write_workbook(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(PROFILES_SHEET)?;
        for (c, h) in OutputRow::HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, c as u16, *h, &bold)?;
        }
        for (r, row) in rows.iter().enumerate() {
            let r = (r + 1) as u32;
            for (c, cell) in row.to_cells().iter().enumerate() {
                if c == OutputRow::HR_COL {
                    sheet.write_boolean(r, c as u16, row.is_hr_related)?;
                } else {
                    sheet.write_string(r, c as u16, cell)?;
                }
            }
        }
    }

    {
        let summary = Summary::of(rows);
        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;
        sheet.write_string_with_format(0, 0, "Metric", &bold)?;
        sheet.write_string_with_format(0, 1, "Count", &bold)?;
        for (i, (label, count)) in summary.metrics().iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_string(r, 0, *label)?;
            sheet.write_number(r, 1, *count as f64)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Input(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hints() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(!looks_like_dir_hint(Path::new("out/file.csv")));
    }

    #[test]
    fn ensure_directory_refuses_files() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("taken");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
        let nested = dir.path().join("a").join("b");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
