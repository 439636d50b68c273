//! Warning types for non-fatal problems found while reading records.
//!
//! A malformed row never aborts a load. The reader skips it, counts it as
//! invalid, and records a [`Warning`] describing what was wrong so the caller
//! can surface it.

use std::fmt;

/// A non-fatal problem encountered during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A required column is absent from the header row.
    ///
    /// Every data row will be invalid as a consequence; the warning is
    /// reported once rather than per row.
    MissingColumn {
        /// The header name that could not be found.
        column: String,
    },

    /// A row has one or more required fields missing or empty.
    InvalidRow {
        /// The 1-based line number of the row.
        line_number: u64,
        /// Header names of the fields that were missing or empty.
        fields: Vec<String>,
    },

    /// A row could not be decoded at all (for example invalid UTF-8).
    MalformedRow {
        /// The 1-based line number of the row, when the decoder knows it.
        line_number: Option<u64>,
        /// A description of the decoding failure.
        error: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning, if any.
    #[must_use]
    pub fn line_number(&self) -> Option<u64> {
        match self {
            Self::MissingColumn { .. } => None,
            Self::InvalidRow { line_number, .. } => Some(*line_number),
            Self::MalformedRow { line_number, .. } => *line_number,
        }
    }

    /// Returns a static string identifying the warning kind.
    ///
    /// ```
    /// use lineage_csv::Warning;
    ///
    /// let warning = Warning::MissingColumn { column: "assetType".to_string() };
    /// assert_eq!(warning.kind(), "missing_column");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => "missing_column",
            Self::InvalidRow { .. } => "invalid_row",
            Self::MalformedRow { .. } => "malformed_row",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column } => write!(f, "missing required column '{column}'"),
            Self::InvalidRow {
                line_number,
                fields,
            } => write!(
                f,
                "line {line_number}: missing or empty field(s): {}",
                fields.join(", ")
            ),
            Self::MalformedRow {
                line_number: Some(line),
                error,
            } => write!(f, "line {line}: malformed row: {error}"),
            Self::MalformedRow {
                line_number: None,
                error,
            } => write!(f, "malformed row: {error}"),
        }
    }
}

impl std::error::Error for Warning {}
