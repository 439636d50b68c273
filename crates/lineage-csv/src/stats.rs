//! Summary statistics reported alongside an ingest.
//!
//! These are reporting-only numbers; nothing downstream builds on them.

use crate::record::RelationshipRecord;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Counts describing one ingested source.
///
/// Node, edge and type counts only consider valid rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Number of data rows read, valid or not.
    pub total_rows: usize,
    /// Number of distinct ids seen as either child or parent.
    pub unique_nodes: usize,
    /// Number of distinct `child -> parent` pairs.
    pub unique_edges: usize,
    /// Number of rows rejected for missing, empty or undecodable fields.
    pub invalid_rows: usize,
    /// Distinct type labels, in sorted order.
    pub types: BTreeSet<String>,
}

impl IngestStats {
    /// Compute statistics for `records`, given the raw row counts.
    #[must_use]
    pub fn compute(records: &[RelationshipRecord], total_rows: usize, invalid_rows: usize) -> Self {
        let mut nodes: HashSet<&str> = HashSet::new();
        let mut edges: HashSet<(&str, &str)> = HashSet::new();
        let mut types = BTreeSet::new();

        for record in records {
            nodes.insert(&record.child_id);
            nodes.insert(&record.parent_id);
            edges.insert((&record.child_id, &record.parent_id));
            types.insert(record.child_type.clone());
            types.insert(record.parent_type.clone());
        }

        Self {
            total_rows,
            unique_nodes: nodes.len(),
            unique_edges: edges.len(),
            invalid_rows,
            types,
        }
    }

    /// Number of rows that made it into the record set.
    #[must_use]
    pub fn valid_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.invalid_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_rows_collapse_to_one_edge() {
        let records = vec![
            RelationshipRecord::new("a", "b", "Server", "Rack"),
            RelationshipRecord::new("a", "b", "Server", "Rack"),
            RelationshipRecord::new("b", "c", "Rack", "Room"),
        ];

        let stats = IngestStats::compute(&records, 4, 1);

        assert_eq!(stats.unique_nodes, 3);
        assert_eq!(stats.unique_edges, 2);
        assert_eq!(stats.valid_rows(), 3);
        assert_eq!(
            stats.types.iter().map(String::as_str).collect::<Vec<_>>(),
            ["Rack", "Room", "Server"]
        );
    }

    #[test]
    fn reversed_pair_is_a_distinct_edge() {
        let records = vec![
            RelationshipRecord::new("a", "b", "T", "T"),
            RelationshipRecord::new("b", "a", "T", "T"),
        ];

        let stats = IngestStats::compute(&records, 2, 0);
        assert_eq!(stats.unique_nodes, 2);
        assert_eq!(stats.unique_edges, 2);
        assert_eq!(stats.types.len(), 1);
    }
}
