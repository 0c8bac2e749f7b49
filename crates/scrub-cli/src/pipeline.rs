//! Record cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the source CSV file into a record frame
//! 2. **Clean**: Canonicalize, filter, and deduplicate the records
//! 3. **Output**: Write the cleaned CSV and optional stats JSON
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use tracing::trace;

use scrub_core::{RecordFrame, build_record_frame, clean_frame, measure_cleaning};
use scrub_ingest::{any_to_string, read_csv_table};
use scrub_model::{CleaningStats, columns};
use scrub_report::{ensure_parent_dir, write_csv_report};

use crate::logging::redact_value;

/// Result of the clean stage.
#[derive(Debug)]
pub struct CleanOutcome {
    /// The cleaned records, same source as the input frame.
    pub frame: RecordFrame,
    /// What cleaning removed, by reason.
    pub stats: CleaningStats,
}

/// Read a customer records CSV file into a [`RecordFrame`].
pub fn load_records(path: &Path) -> Result<RecordFrame> {
    let table = read_csv_table(path)?;
    build_record_frame(&table, path)
}

/// Clean a record frame and measure what was removed.
pub fn clean_records(frame: &RecordFrame) -> Result<CleanOutcome> {
    let cleaned = clean_frame(&frame.data)?;
    let stats = measure_cleaning(&frame.data, &cleaned)?;
    if let Some(email) = first_email(&cleaned) {
        trace!(email = redact_value(&email), "first surviving record");
    }
    Ok(CleanOutcome {
        frame: frame.with_data(cleaned),
        stats,
    })
}

/// Write cleaned records to `path` as CSV.
pub fn write_cleaned(frame: &RecordFrame, path: &Path) -> Result<()> {
    write_csv_report(frame, path)
}

/// Write cleaning statistics to `path` as pretty-printed JSON.
pub fn write_stats_json(stats: &CleaningStats, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(stats).context("serialize stats")?;
    fs::write(path, json).with_context(|| format!("write stats: {}", path.display()))?;
    Ok(())
}

fn first_email(df: &DataFrame) -> Option<String> {
    let series = df.column(columns::EMAIL).ok()?;
    match series.get(0).ok()? {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}
