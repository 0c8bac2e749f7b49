//! Record frame type for customer tables.
//!
//! A [`RecordFrame`] wraps a Polars DataFrame with the source file it was
//! loaded from, so reports can name where the rows came from.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;

/// A customer record table with source provenance.
///
/// Column order is `name`, `email`, then any passthrough columns in their
/// input order. Row order is the file order and determines which duplicate
/// survives cleaning.
#[derive(Debug, Clone)]
pub struct RecordFrame {
    /// The file the records were loaded from.
    pub source: PathBuf,
    /// The record contents as a Polars DataFrame.
    pub data: DataFrame,
}

impl RecordFrame {
    pub fn new(source: impl Into<PathBuf>, data: DataFrame) -> Self {
        Self {
            source: source.into(),
            data,
        }
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// A frame holding `data` cleaned from the same source.
    pub fn with_data(&self, data: DataFrame) -> Self {
        Self {
            source: self.source.clone(),
            data,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
