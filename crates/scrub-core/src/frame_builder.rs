//! DataFrame construction from raw CSV tables.
//!
//! The builder locates the required `name` and `email` columns, stores them
//! first under their canonical lowercase headers, and carries every other
//! column through unchanged.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use scrub_ingest::CsvTable;
use scrub_model::{ScrubError, columns};

use crate::frame::RecordFrame;

/// Build a [`RecordFrame`] from a raw CSV table.
///
/// Headers are matched case-insensitively; the output schema is `name`,
/// `email`, then the passthrough columns in their input order, each under
/// its original header. Empty cells become nulls. A table without a `name`
/// or `email` header is rejected.
pub fn build_record_frame(table: &CsvTable, source: &Path) -> Result<RecordFrame> {
    let name_idx = table
        .find_header(|header| columns::header_matches(header, columns::NAME))
        .ok_or_else(|| ScrubError::MissingColumn(columns::NAME.to_string()))?;
    let email_idx = table
        .find_header(|header| columns::header_matches(header, columns::EMAIL))
        .ok_or_else(|| ScrubError::MissingColumn(columns::EMAIL.to_string()))?;

    let mut cols = Vec::with_capacity(table.headers.len());
    cols.push(string_column(columns::NAME, table, name_idx));
    cols.push(string_column(columns::EMAIL, table, email_idx));
    for (idx, header) in table.headers.iter().enumerate() {
        if idx == name_idx || idx == email_idx {
            continue;
        }
        cols.push(string_column(header, table, idx));
    }

    let data = DataFrame::new(cols)
        .with_context(|| format!("build record frame: {}", source.display()))?;
    debug!(
        source = %source.display(),
        column_count = data.width(),
        row_count = data.height(),
        "record frame built"
    );
    Ok(RecordFrame::new(source, data))
}

/// A string column taken from one table position, with empty cells as nulls.
fn string_column(name: &str, table: &CsvTable, idx: usize) -> Column {
    let values: Vec<Option<String>> = table
        .rows
        .iter()
        .map(|row| {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            }
        })
        .collect();
    Series::new(name.into(), values).into_column()
}
