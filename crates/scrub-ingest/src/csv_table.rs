use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// A raw CSV file as an ordered string table.
///
/// Headers and cells are whitespace-normalized but otherwise untouched;
/// interpreting values (nulls, canonical forms) is the frame builder's job.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Position of a header matching `predicate`, if any.
    pub fn find_header(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.headers.iter().position(|header| predicate(header))
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`CsvTable`].
///
/// The first non-empty row is the header row (the input contract guarantees
/// one); fully empty rows are skipped; short rows are padded so every row
/// has one cell per header.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        column_count = headers.len(),
        row_count = rows.len(),
        "csv table loaded"
    );
    Ok(CsvTable { headers, rows })
}
