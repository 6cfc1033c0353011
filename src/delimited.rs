// src/delimited.rs
use std::io::Write;

use crate::error::{Error, Result};
use crate::profile::OutputRow;

fn writer<W: Write>(w: W, delim: u8) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(delim)
        .flexible(false)
        .from_writer(w)
}

/// Write rows (optionally preceded by the header line) to any writer.
pub fn write_rows<'r, W: Write>(
    w: W,
    rows: impl IntoIterator<Item = &'r OutputRow>,
    include_headers: bool,
    delim: u8,
) -> Result<()> {
    let mut wtr = writer(w, delim);
    if include_headers {
        wtr.write_record(OutputRow::HEADERS)?;
    }
    for row in rows {
        wtr.write_record(row.to_cells())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create a full export string (Copy) from rows and toggles.
pub fn to_export_string<'r>(
    rows: impl IntoIterator<Item = &'r OutputRow>,
    include_headers: bool,
    delim: u8,
) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, rows, include_headers, delim)?;

    match String::from_utf8(buf) {
        Ok(s) => Ok(s),
        Err(e) => Err(Error::Input(format!("export produced invalid UTF-8: {e}"))),
    }
}
