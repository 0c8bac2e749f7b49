//! Measuring what cleaning removed.
//!
//! [`measure_cleaning`] inspects the raw input frame so the report can say
//! *why* rows disappeared, not just how many.

use std::collections::BTreeSet;

use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use scrub_ingest::any_to_string;
use scrub_model::{CleaningStats, columns};

use crate::text::canonicalize;

/// Count the rows cleaning dropped, by reason.
///
/// `input` is the frame as loaded, `output` the frame [`clean_frame`]
/// returned for it. The null, empty, and duplicate buckets describe the
/// input email column and may overlap: a second null-email row counts as
/// both null and duplicate, and a second whitespace-only email as both
/// empty and duplicate. Duplicates are occurrences beyond the first of
/// each canonical email, with all nulls grouped under one key.
///
/// [`clean_frame`]: crate::clean::clean_frame
pub fn measure_cleaning(input: &DataFrame, output: &DataFrame) -> Result<CleaningStats> {
    let series = input.column(columns::EMAIL)?;
    let mut stats = CleaningStats {
        input_rows: input.height(),
        ..CleaningStats::default()
    };
    let mut seen: BTreeSet<Option<String>> = BTreeSet::new();
    for idx in 0..input.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        let key = match value {
            AnyValue::Null => {
                stats.null_emails += 1;
                None
            }
            other => {
                let canonical = canonicalize(&any_to_string(other));
                if canonical.is_empty() {
                    stats.empty_emails += 1;
                }
                Some(canonical)
            }
        };
        if !seen.insert(key) {
            stats.duplicate_emails += 1;
        }
    }
    stats.output_rows = output.height();
    stats.rows_removed = stats.input_rows.saturating_sub(stats.output_rows);
    debug!(
        input_rows = stats.input_rows,
        null_emails = stats.null_emails,
        empty_emails = stats.empty_emails,
        duplicate_emails = stats.duplicate_emails,
        output_rows = stats.output_rows,
        "cleaning measured"
    );
    Ok(stats)
}
