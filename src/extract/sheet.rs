use crate::error::{DirectoryError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::{debug, info};

/// A worksheet as plain text: the header row and the data rows below it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Text of `row` at `column`, or "" when the row is shorter.
    pub fn cell(row: &[String], column: usize) -> &str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Reads the worksheet at `sheet_index` from an xlsx/xls/ods workbook.
pub fn load_sheet(path: &Path, sheet_index: usize) -> Result<Sheet> {
    if !path.exists() {
        return Err(DirectoryError::not_found(path));
    }

    info!("Loading spreadsheet: {}", path.display());
    let mut workbook =
        open_workbook_auto(path).map_err(|e| DirectoryError::format(path, e.to_string()))?;
    let range = workbook
        .worksheet_range_at(sheet_index)
        .ok_or_else(|| {
            DirectoryError::format(path, format!("workbook has no sheet at index {sheet_index}"))
        })?
        .map_err(|e| DirectoryError::format(path, e.to_string()))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows
        .next()
        .ok_or_else(|| DirectoryError::format(path, "worksheet is empty"))?;
    let rows: Vec<Vec<String>> = rows.collect();

    info!("Found columns: {:?}", headers);
    debug!("Read {} data rows", rows.len());
    Ok(Sheet { headers, rows })
}

/// Cell contents as text. Whole numbers lose the trailing `.0`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
