//! CSV reading with resilient row handling.
//!
//! The header row decides where each required column lives. Every data row
//! after it either becomes a [`RelationshipRecord`] or is counted as invalid
//! with a [`Warning`]; only I/O failures and an unreadable header abort the
//! read.

use crate::error::{Error, Result};
use crate::record::{ColumnNames, RelationshipRecord};
use crate::stats::IngestStats;
use crate::warning::Warning;
use std::fs::File;
use std::io;
use std::path::Path;

/// Everything produced by one ingest.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Valid records, in source order.
    pub records: Vec<RelationshipRecord>,
    /// Summary counts.
    pub stats: IngestStats,
    /// Non-fatal problems, in the order they were found.
    pub warnings: Vec<Warning>,
}

/// Reader for relationship CSV data.
///
/// # Examples
///
/// ```
/// use lineage_csv::{ColumnNames, RecordReader};
///
/// let data = "parentAssetId,assetId,parentAssetType,assetType\nrack-7,web-01,Rack,Server\n";
/// let report = RecordReader::new(data.as_bytes(), ColumnNames::default())
///     .read_all()
///     .unwrap();
///
/// assert_eq!(report.records[0].child_id, "web-01");
/// assert_eq!(report.records[0].parent_type, "Rack");
/// ```
pub struct RecordReader<R> {
    reader: csv::Reader<R>,
    columns: ColumnNames,
}

impl<R: io::Read> RecordReader<R> {
    /// Wrap `reader`, locating fields by the given header names.
    #[must_use]
    pub fn new(reader: R, columns: ColumnNames) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self { reader, columns }
    }

    /// Read every row, collecting valid records, statistics and warnings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Csv`] if the header row cannot be decoded and
    /// [`Error::Io`] if the underlying reader fails mid-stream.
    pub fn read_all(mut self) -> Result<IngestReport> {
        let headers = self.reader.headers()?.clone();
        let names = self.columns.as_array();

        let mut warnings = Vec::new();
        let mut indices = [None; 4];
        // No header row at all means no data either; nothing to report.
        let has_header = !headers.is_empty();
        for (slot, name) in indices.iter_mut().zip(names) {
            *slot = headers.iter().position(|h| h.trim() == name);
            if slot.is_none() && has_header {
                tracing::warn!(column = name, "required column not found in header");
                warnings.push(Warning::MissingColumn {
                    column: name.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        let mut total_rows = 0;
        let mut invalid_rows = 0;

        for row in self.reader.records() {
            total_rows += 1;

            let row = match row {
                Ok(row) => row,
                Err(err) if err.is_io_error() => return Err(into_io_error(err)),
                Err(err) => {
                    invalid_rows += 1;
                    let line_number = err.position().map(csv::Position::line);
                    tracing::debug!(?line_number, error = %err, "skipping undecodable row");
                    warnings.push(Warning::MalformedRow {
                        line_number,
                        error: err.to_string(),
                    });
                    continue;
                }
            };

            let fields: [&str; 4] =
                std::array::from_fn(|i| indices[i].and_then(|idx| row.get(idx)).unwrap_or(""));

            let missing: Vec<String> = fields
                .iter()
                .zip(names)
                .filter(|(value, _)| value.is_empty())
                .map(|(_, name)| name.to_string())
                .collect();

            if !missing.is_empty() {
                invalid_rows += 1;
                let line_number = row.position().map_or(0, csv::Position::line);
                tracing::debug!(line_number, ?missing, "skipping incomplete row");
                warnings.push(Warning::InvalidRow {
                    line_number,
                    fields: missing,
                });
                continue;
            }

            let [child_id, parent_id, child_type, parent_type] = fields;
            records.push(RelationshipRecord::new(
                child_id,
                parent_id,
                child_type,
                parent_type,
            ));
        }

        if invalid_rows > 0 {
            tracing::warn!(invalid_rows, total_rows, "some rows were rejected");
        }

        let stats = IngestStats::compute(&records, total_rows, invalid_rows);
        tracing::debug!(
            total_rows,
            unique_nodes = stats.unique_nodes,
            unique_edges = stats.unique_edges,
            "ingest complete"
        );

        Ok(IngestReport {
            records,
            stats,
            warnings,
        })
    }
}

/// Read a relationship CSV file from disk.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened, otherwise the same
/// errors as [`RecordReader::read_all`].
pub fn read_path(path: &Path, columns: ColumnNames) -> Result<IngestReport> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    RecordReader::new(file, columns).read_all()
}

fn into_io_error(err: csv::Error) -> Error {
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => Error::Io(io_err),
        other => Error::Io(io::Error::other(format!("{other:?}"))),
    }
}
