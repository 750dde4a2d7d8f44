//! CSV export of the locker store.
//!
//! The header is the key set of the first record, in that record's field
//! order. Later records are written against the same header and a missing key
//! becomes an empty cell. A record carrying a key the header lacks fails the
//! export before any file is created.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::shared::locker::Locker;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("locker {locker_id} has field '{key}' that is not in the CSV header")]
    UnexpectedField { locker_id: String, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// The store was empty; no file was created
    NothingToExport,
}

pub fn export_to_path(lockers: &[Locker], path: &Path) -> Result<ExportOutcome, ExportError> {
    if lockers.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let header = csv_header(lockers)?;

    let io_error = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let rows = write_csv(&header, lockers, &mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows,
    })
}

/// Column names for `lockers`: the first record's keys. Empty when there
/// are no records.
pub fn csv_header(lockers: &[Locker]) -> Result<Vec<&str>, ExportError> {
    let Some(first) = lockers.first() else {
        return Ok(Vec::new());
    };
    let header: Vec<&str> = first.fields().keys().map(String::as_str).collect();

    for locker in &lockers[1..] {
        if let Some(key) = locker.fields().keys().find(|key| !first.fields().contains_key(*key)) {
            return Err(ExportError::UnexpectedField {
                locker_id: locker.id().to_string(),
                key: key.clone(),
            });
        }
    }
    Ok(header)
}

/// Write `header` plus one row per locker; returns the number of rows
pub fn write_csv<W: Write>(
    header: &[&str],
    lockers: &[Locker],
    out: &mut W,
) -> std::io::Result<usize> {
    if lockers.is_empty() {
        return Ok(0);
    }

    write_record(out, header.iter().map(|key| escape_cell(key)))?;
    for locker in lockers {
        write_record(
            out,
            header
                .iter()
                .map(|key| escape_cell(&cell_text(locker.get(key)))),
        )?;
    }
    Ok(lockers.len())
}

fn write_record<W: Write>(out: &mut W, cells: impl Iterator<Item = String>) -> std::io::Result<()> {
    let line = cells.collect::<Vec<_>>().join(",");
    out.write_all(line.as_bytes())?;
    out.write_all(b"\r\n")
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn escape_cell(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
