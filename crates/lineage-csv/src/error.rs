//! Error types for lineage-csv operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for lineage-csv operations.
///
/// Only failures that prevent reading the source at all end up here. Bad
/// rows are reported through [`crate::Warning`] instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// IO error occurred while reading.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The CSV header row could not be decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A specialized Result type for lineage-csv operations.
pub type Result<T> = std::result::Result<T, Error>;
