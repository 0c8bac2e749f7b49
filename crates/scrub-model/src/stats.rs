//! Row accounting for a cleaning run.

use serde::{Deserialize, Serialize};

/// Counts reported after cleaning one table.
///
/// These are informational: `null_emails`, `empty_emails`, and
/// `duplicate_emails` describe the raw input and may overlap (a second
/// null-email row counts toward both the null and duplicate buckets).
/// `rows_removed` is always `input_rows - output_rows`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningStats {
    /// Rows in the source table.
    pub input_rows: usize,
    /// Input rows whose email is null.
    pub null_emails: usize,
    /// Input rows whose email is empty after trimming.
    pub empty_emails: usize,
    /// Input occurrences beyond the first of each canonical email.
    pub duplicate_emails: usize,
    /// Rows in the cleaned table.
    pub output_rows: usize,
    /// Rows dropped by filtering and deduplication.
    pub rows_removed: usize,
}
