// src/input.rs
//! Bulk URL input. Free text (one URL per line), a delimited file or the
//! first worksheet of a spreadsheet, each with a header row from which one
//! column is taken. Validation happens later;
//! this module only produces an ordered list of non-empty strings.

use std::fs;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Reader};

use crate::core::sanitize::clean_cell;
use crate::error::{Error, Result};

/// One URL per line; lines are trimmed and blank lines dropped.
pub fn parse_text(text: &str) -> Vec<String> {
    text.lines()
        .map(clean_cell)
        .filter(|l| !l.is_empty())
        .collect()
}

/// How a file should be read, from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Delimited(u8),
    /// First worksheet of an .xlsx/.xls/.ods workbook
    Spreadsheet,
    Text,
}

impl InputKind {
    pub fn for_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(InputKind::Delimited(b',')),
            "tsv" | "tab" => Ok(InputKind::Delimited(b'\t')),
            "txt" | "" => Ok(InputKind::Text),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(InputKind::Spreadsheet),
            other => Err(Error::Input(format!("Unsupported input type: .{other}"))),
        }
    }
}

/// A delimited file or worksheet held in memory: header row + data rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl InputTable {
    pub fn load(path: &Path) -> Result<Self> {
        match InputKind::for_path(path)? {
            InputKind::Delimited(delim) => {
                let file = fs::File::open(path)?;
                Self::from_reader(file, delim)
            }
            InputKind::Spreadsheet => Self::from_workbook(path),
            InputKind::Text => {
                // Single synthetic column so the GUI can treat both alike.
                let text = fs::read_to_string(path)?;
                Ok(Self {
                    headers: vec![s!("url")],
                    rows: parse_text(&text).into_iter().map(|u| vec![u]).collect(),
                })
            }
        }
    }

    pub fn from_reader<R: Read>(reader: R, delim: u8) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delim)
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(clean_cell).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(clean_cell).collect());
        }
        Ok(Self { headers, rows })
    }

    /// First worksheet; its first row is the header. Cells render as text.
    pub fn from_workbook(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::Input(format!("No worksheet in {}", path.display())))??;

        let mut rows = range
            .rows()
            .map(|r| r.iter().map(|cell| clean_cell(&cell.to_string())).collect::<Vec<_>>());
        let headers = rows.next().unwrap_or_default();
        Ok(Self { headers, rows: rows.collect() })
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Case-insensitive header lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    }

    /// First header naming a URL, else the first column whose first
    /// non-empty value looks like LinkedIn, else column 0.
    pub fn guess_url_column(&self) -> usize {
        if let Some(ix) = self.headers.iter().position(|h| {
            let h = h.to_ascii_lowercase();
            h.contains("url") || h.contains("linkedin")
        }) {
            return ix;
        }
        (0..self.ncols())
            .find(|&c| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(c))
                    .find(|v| !v.is_empty())
                    .is_some_and(|v| v.to_ascii_lowercase().contains("linkedin.com"))
            })
            .unwrap_or(0)
    }

    /// Non-empty values of one column, in row order.
    pub fn column_values(&self, col: usize) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|r| r.get(col))
            .filter(|v| !v.is_empty())
            .cloned()
            .collect()
    }
}

/// Read URLs from a file. `column` picks a header for delimited files;
/// `None` guesses. Text files ignore `column`.
pub fn load_urls(path: &Path, column: Option<&str>) -> Result<Vec<String>> {
    let table = InputTable::load(path)?;
    let column = match InputKind::for_path(path)? {
        InputKind::Text => None,
        InputKind::Delimited(_) | InputKind::Spreadsheet => column,
    };
    let col = match column {
        Some(name) => table
            .column_index(name)
            .ok_or_else(|| Error::Input(format!("Column not found: {name}")))?,
        None => table.guess_url_column(),
    };
    logd!("Input: {} rows from {} (column {})", table.rows.len(), path.display(), col);
    Ok(table.column_values(col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn text_lines_are_trimmed_and_blank_lines_dropped() {
        let urls = parse_text("  https://linkedin.com/in/a \n\n\r\nhttps://linkedin.com/in/b\n   \n");
        assert_eq!(urls, vec!["https://linkedin.com/in/a", "https://linkedin.com/in/b"]);
    }

    #[test]
    fn table_guesses_url_header() {
        let data = "Name,Profile URL,Team\nA,https://linkedin.com/in/a,x\nB,,y\nC,https://linkedin.com/in/c,z\n";
        let t = InputTable::from_reader(data.as_bytes(), b',').unwrap();
        assert_eq!(t.guess_url_column(), 1);
        assert_eq!(
            t.column_values(1),
            vec!["https://linkedin.com/in/a", "https://linkedin.com/in/c"]
        );
    }

    #[test]
    fn table_guesses_by_content_when_headers_are_vague() {
        let data = "who\twhere\nAnn\thttps://www.linkedin.com/in/ann\n";
        let t = InputTable::from_reader(data.as_bytes(), b'\t').unwrap();
        assert_eq!(t.guess_url_column(), 1);
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let data = "a,b\n1\n2,3,4\n";
        let t = InputTable::from_reader(data.as_bytes(), b',').unwrap();
        assert_eq!(t.column_values(1), vec!["3"]);
        assert_eq!(t.preview(1).len(), 1);
    }

    #[test]
    fn load_urls_by_named_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.csv");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "id,LinkedIn").unwrap();
        writeln!(f, "1,https://linkedin.com/in/one").unwrap();
        writeln!(f, "2,\"https://linkedin.com/in/two\"").unwrap();
        drop(f);

        let urls = load_urls(&path, Some("linkedin")).unwrap();
        assert_eq!(urls, vec!["https://linkedin.com/in/one", "https://linkedin.com/in/two"]);
        assert!(matches!(load_urls(&path, Some("nope")), Err(Error::Input(_))));
    }

    #[test]
    fn input_kind_follows_extension() {
        assert_eq!(InputKind::for_path(Path::new("a.CSV")).unwrap(), InputKind::Delimited(b','));
        assert_eq!(InputKind::for_path(Path::new("a.xls")).unwrap(), InputKind::Spreadsheet);
        assert_eq!(InputKind::for_path(Path::new("a.txt")).unwrap(), InputKind::Text);
        assert!(matches!(InputKind::for_path(Path::new("a.pdf")), Err(Error::Input(_))));
    }

    #[test]
    fn load_urls_from_first_worksheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.xlsx");

        let mut wb = rust_xlsxwriter::Workbook::new();
        let sheet = wb.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "LinkedIn URL").unwrap();
        sheet.write_string(1, 0, "Ann").unwrap();
        sheet.write_string(1, 1, " https://www.linkedin.com/in/ann ").unwrap();
        sheet.write_string(2, 0, "Bo").unwrap();
        sheet.write_string(3, 0, "Cy").unwrap();
        sheet.write_string(3, 1, "https://www.linkedin.com/in/cy").unwrap();
        wb.add_worksheet().write_string(0, 0, "ignored").unwrap();
        wb.save(&path).unwrap();

        let table = InputTable::load(&path).unwrap();
        assert_eq!(table.headers, vec!["Name", "LinkedIn URL"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.guess_url_column(), 1);

        let expected = vec!["https://www.linkedin.com/in/ann", "https://www.linkedin.com/in/cy"];
        assert_eq!(load_urls(&path, None).unwrap(), expected);
        assert_eq!(load_urls(&path, Some("linkedin url")).unwrap(), expected);
        assert_eq!(load_urls(&path, Some("name")).unwrap(), vec!["Ann", "Bo", "Cy"]);
    }
}
