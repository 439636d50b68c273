//! Adjacency construction from relationship records.

use crate::domain::AssetId;
use lineage_csv::RelationshipRecord;
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap};

/// Directed adjacency over the full record set.
///
/// - `out_adj`: child → set of parents
/// - `in_adj`: parent → set of children
/// - `type_of`: id → type label, first write wins
///
/// Neighbor sets are ordered so traversals visit them in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
    out_adj: HashMap<AssetId, BTreeSet<AssetId>>,
    in_adj: HashMap<AssetId, BTreeSet<AssetId>>,
    type_of: HashMap<AssetId, String>,
}

impl AdjacencyIndex {
    /// Build the index from validated records.
    ///
    /// Records are not re-validated. Within each record the child's type is
    /// registered before the parent's, so an id that appears as both in the
    /// same row keeps the child type.
    #[must_use]
    pub fn build(records: &[RelationshipRecord]) -> Self {
        let mut index = Self::default();

        for record in records {
            let child = AssetId::from(record.child_id.as_str());
            let parent = AssetId::from(record.parent_id.as_str());

            index
                .type_of
                .entry(child.clone())
                .or_insert_with(|| record.child_type.clone());
            index
                .type_of
                .entry(parent.clone())
                .or_insert_with(|| record.parent_type.clone());

            index
                .out_adj
                .entry(child.clone())
                .or_default()
                .insert(parent.clone());
            index.in_adj.entry(parent).or_default().insert(child);
        }

        tracing::debug!(
            nodes = index.type_of.len(),
            sources = index.out_adj.len(),
            "built adjacency index"
        );
        index
    }

    /// Neighbors of `id`: parents for [`Direction::Outgoing`], children for
    /// [`Direction::Incoming`]. `None` if `id` has no edges that way.
    #[must_use]
    pub fn neighbors(&self, id: &str, direction: Direction) -> Option<&BTreeSet<AssetId>> {
        match direction {
            Direction::Outgoing => self.out_adj.get(id),
            Direction::Incoming => self.in_adj.get(id),
        }
    }

    /// Parents of `id` (child → parent edges).
    #[must_use]
    pub fn parents_of(&self, id: &str) -> Option<&BTreeSet<AssetId>> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Children of `id` (parent ← child edges).
    #[must_use]
    pub fn children_of(&self, id: &str) -> Option<&BTreeSet<AssetId>> {
        self.neighbors(id, Direction::Incoming)
    }

    /// The recorded type of `id`, if it appeared in any record.
    #[must_use]
    pub fn type_of(&self, id: &str) -> Option<&str> {
        self.type_of.get(id).map(String::as_str)
    }

    /// Returns `true` if `id` appeared in any record.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.type_of.contains_key(id)
    }

    /// Number of distinct ids across all records.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.type_of.len()
    }

    /// Number of distinct `child -> parent` pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.out_adj.values().map(BTreeSet::len).sum()
    }

    /// Returns `true` if no records were indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.type_of.is_empty()
    }
}
