//! CLI argument definitions for the record scrubber.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "record-scrubber",
    version,
    about = "Record Scrubber - Normalize and deduplicate customer records",
    long_about = "Clean a customer record CSV file.\n\n\
                  Names and emails are trimmed and lowercased, rows without a\n\
                  usable email are dropped, and only the first row per email\n\
                  is kept. Every other column passes through unchanged."
)]
pub struct Cli {
    /// Path to the customer records CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for cleaned records (default: <INPUT stem>_cleaned.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write cleaning statistics as JSON to a file.
    #[arg(long = "stats-json", value_name = "PATH")]
    pub stats_json: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow customer names and emails to appear in trace logs.
    ///
    /// By default row-level values are replaced with a redaction token so
    /// logs stay free of personal data.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
