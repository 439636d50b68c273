//! Lineage - reachability analysis over parent/child asset relationships.
//!
//! The crate turns [`RelationshipRecord`](lineage_csv::RelationshipRecord)s
//! into an adjacency index, extracts the subgraph reachable from a set of
//! seed assets, splits it into islands, and classifies the ancestor and
//! descendant paths around a focus node. Every query is a pure function of
//! its inputs and returns a fresh value.
//!
//! ```
//! use lineage::graph::{classify, detect_islands, extract, AdjacencyIndex};
//! use lineage::seeds::parse_seeds;
//! use lineage_csv::RelationshipRecord;
//!
//! let records = vec![
//!     RelationshipRecord::new("X", "Y", "A", "B"),
//!     RelationshipRecord::new("Y", "Z", "B", "C"),
//! ];
//! let index = AdjacencyIndex::build(&records);
//! let graph = extract(&parse_seeds("X"), &index);
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(detect_islands(&graph).len(), 1);
//!
//! let paths = classify("Y", &graph);
//! assert!(paths.ancestors.contains("Z"));
//! assert!(paths.descendants.contains("X"));
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod highlight;
pub mod output;
pub mod palette;
pub mod seeds;

pub use domain::{AssetId, UNKNOWN_TYPE};
pub use error::{Error, Result};
