//! CSV writer for cleaned record tables.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::AnyValue;
use tracing::info;

use scrub_core::RecordFrame;
use scrub_ingest::any_to_string;

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Write a record frame to `path` as CSV.
///
/// The header row is the frame's column order; null cells are written as
/// empty strings. Missing parent directories are created.
pub fn write_csv_report(frame: &RecordFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("write csv: {}", path.display()))?;

    let df = &frame.data;
    let headers: Vec<&str> = df.get_column_names().iter().map(|name| name.as_str()).collect();
    writer.write_record(&headers).context("write header row")?;

    let columns = df.get_columns();
    for idx in 0..df.height() {
        let mut row = Vec::with_capacity(columns.len());
        for column in columns {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            row.push(any_to_string(value));
        }
        writer
            .write_record(&row)
            .with_context(|| format!("write row {idx}"))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    info!(
        path = %path.display(),
        row_count = df.height(),
        "cleaned records written"
    );
    Ok(())
}
