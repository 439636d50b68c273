//! Error types for lineage operations.
//!
//! The graph engine itself cannot fail; these errors come from loading
//! configuration and source data before the engine runs.

use std::io;
use thiserror::Error;

/// The error type for lineage operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The relationship source could not be read.
    #[error("ingest error: {0}")]
    Ingest(#[from] lineage_csv::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for lineage operations.
pub type Result<T> = std::result::Result<T, Error>;
