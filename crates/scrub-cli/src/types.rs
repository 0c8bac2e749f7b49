use std::path::PathBuf;

use scrub_model::CleaningStats;

/// Outcome of one cleaning run, as reported to the user.
#[derive(Debug)]
pub struct CleanResult {
    pub source: PathBuf,
    /// Where the cleaned records were written; `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Where the stats JSON was written, if requested.
    pub stats_json: Option<PathBuf>,
    pub stats: CleaningStats,
    pub dry_run: bool,
}
