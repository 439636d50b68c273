//! The in-memory graph engine.
//!
//! Data flows strictly downward through four stages:
//!
//! | Stage | Entry point | Produces |
//! |-------|-------------|----------|
//! | Adjacency | [`AdjacencyIndex::build`] | child→parent and parent→child indices, type index |
//! | Extraction | [`extract`] | [`Graph`] of everything reachable from the seeds |
//! | Islands | [`detect_islands`] | size-ordered [`Island`]s |
//! | Classification | [`classify`] | ancestor/descendant nodes and path edges |
//!
//! # Edge Direction
//!
//! Edges always point **child → parent**. Following edges forward
//! ([`Direction::Outgoing`]) walks towards ancestors; following them
//! backwards ([`Direction::Incoming`]) walks towards descendants.
//!
//! Relationships are not assumed to be acyclic. Every traversal keeps a
//! visited set and terminates on cycles.

mod adjacency;
mod classify;
mod extract;
mod filter;
mod islands;

pub use adjacency::AdjacencyIndex;
pub use classify::{classify, Classification};
pub use extract::extract;
pub use islands::{detect_islands, Island};
pub use petgraph::Direction;

use crate::domain::AssetId;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A node of an extracted graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Unique id.
    pub id: AssetId,
    /// Type label, fixed the first time the id was seen.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Ids this node points to, restricted to the owning graph.
    pub parents: BTreeSet<AssetId>,
    /// Ids pointing to this node, restricted to the owning graph.
    pub children: BTreeSet<AssetId>,
    /// `children.len()`
    pub in_degree: usize,
    /// `parents.len()`
    pub out_degree: usize,
}

impl Node {
    /// Create a node, deriving its degrees from the neighbor sets.
    pub fn new(
        id: AssetId,
        node_type: impl Into<String>,
        parents: BTreeSet<AssetId>,
        children: BTreeSet<AssetId>,
    ) -> Self {
        Self {
            id,
            node_type: node_type.into(),
            in_degree: children.len(),
            out_degree: parents.len(),
            parents,
            children,
        }
    }

    /// Neighbors in the given direction: parents for
    /// [`Direction::Outgoing`], children for [`Direction::Incoming`].
    #[must_use]
    pub fn neighbors(&self, direction: Direction) -> &BTreeSet<AssetId> {
        match direction {
            Direction::Outgoing => &self.parents,
            Direction::Incoming => &self.children,
        }
    }
}

/// A directed `source -> target` (child → parent) edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    /// The child end.
    pub source: AssetId,
    /// The parent end.
    pub target: AssetId,
}

impl Edge {
    /// Create an edge from `source` to `target`.
    pub fn new(source: impl Into<AssetId>, target: impl Into<AssetId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The edge key used by presentation layers, `"source->target"`.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

/// An immutable graph snapshot.
///
/// Every id referenced by an edge or by a node's `parents`/`children` is a
/// key of `nodes`; constructors in this crate never produce dangling
/// references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// Nodes keyed by id.
    pub nodes: BTreeMap<AssetId, Node>,
    /// Unique edges in discovery order.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns `true` if `id` is a node of this graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The edges as a set, for order-insensitive comparison.
    #[must_use]
    pub fn edge_set(&self) -> BTreeSet<&Edge> {
        self.edges.iter().collect()
    }

    /// Distinct node type labels, sorted.
    #[must_use]
    pub fn types(&self) -> BTreeSet<&str> {
        self.nodes.values().map(|n| n.node_type.as_str()).collect()
    }
}
