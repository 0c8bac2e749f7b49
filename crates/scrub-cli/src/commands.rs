use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::Cli;
use crate::pipeline::{clean_records, load_records, write_cleaned, write_stats_json};
use crate::types::CleanResult;

/// Run the full cleaning pipeline for one input file.
pub fn run_clean(args: &Cli) -> Result<CleanResult> {
    let input = &args.input;
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let frame = load_records(input)?;
    info!(
        input_rows = frame.record_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let clean_start = Instant::now();
    let outcome = clean_records(&frame)?;
    info!(
        output_rows = outcome.stats.output_rows,
        rows_removed = outcome.stats.rows_removed,
        duration_ms = clean_start.elapsed().as_millis(),
        "cleaning complete"
    );

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| derived_output_path(input));
    let output = if args.dry_run {
        info!(output = %output_path.display(), "dry run, skipping output");
        None
    } else {
        write_cleaned(&outcome.frame, &output_path)?;
        Some(output_path)
    };

    let stats_json = match &args.stats_json {
        Some(path) => {
            write_stats_json(&outcome.stats, path)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(CleanResult {
        source: input.clone(),
        output,
        stats_json,
        stats: outcome.stats,
        dry_run: args.dry_run,
    })
}

/// Default output path: the input path with a `_cleaned` suffix on the stem.
fn derived_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("records");
    input.with_file_name(format!("{stem}_cleaned.csv"))
}
