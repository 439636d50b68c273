//! Resilient CSV ingestion of parent/child asset relationships.
//!
//! Each CSV row describes one directed `child -> parent` relationship plus
//! the type labels of both endpoints. Rows with a missing or empty field are
//! counted and reported as [`Warning`]s instead of failing the whole load.
//!
//! ```
//! use lineage_csv::{ColumnNames, RecordReader};
//!
//! let data = "assetId,parentAssetId,assetType,parentAssetType\n\
//!             web-01,rack-7,Server,Rack\n\
//!             web-02,,Server,Rack\n";
//!
//! let report = RecordReader::new(data.as_bytes(), ColumnNames::default())
//!     .read_all()
//!     .unwrap();
//!
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.stats.invalid_rows, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod record;
pub mod stats;
pub mod warning;

pub use error::{Error, Result};
pub use reader::{read_path, IngestReport, RecordReader};
pub use record::{ColumnNames, RelationshipRecord};
pub use stats::IngestStats;
pub use warning::Warning;
