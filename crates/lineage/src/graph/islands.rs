//! Connected-component ("island") detection.

use super::Graph;
use crate::domain::AssetId;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// One connected component of a graph's undirected view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Island {
    /// Member node ids.
    pub nodes: BTreeSet<AssetId>,
    /// `nodes.len()`
    pub size: usize,
}

impl Island {
    /// Create an island from its members.
    #[must_use]
    pub fn new(nodes: BTreeSet<AssetId>) -> Self {
        Self {
            size: nodes.len(),
            nodes,
        }
    }

    /// The smallest member id, used to order islands of equal size.
    #[must_use]
    pub fn representative(&self) -> Option<&AssetId> {
        self.nodes.first()
    }

    /// Returns `true` if `id` belongs to this island.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }
}

/// Partition `graph` into islands, treating every edge as undirected.
///
/// Islands are sorted by ascending size. Equal sizes are ordered by their
/// [`representative`](Island::representative), the smallest member id in
/// natural string order, so the output is identical across runs.
///
/// Every node belongs to exactly one island, isolated nodes included.
#[must_use]
pub fn detect_islands(graph: &Graph) -> Vec<Island> {
    let mut view: UnGraphMap<&str, ()> =
        UnGraphMap::with_capacity(graph.node_count(), graph.edge_count());
    for id in graph.nodes.keys() {
        view.add_node(id.as_str());
    }
    for edge in &graph.edges {
        view.add_edge(edge.source.as_str(), edge.target.as_str(), ());
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(graph.node_count());
    let mut islands = Vec::new();

    // Ascending id order: each island is discovered from its smallest member.
    for id in graph.nodes.keys() {
        if seen.contains(id.as_str()) {
            continue;
        }

        let mut bfs = Bfs::new(&view, id.as_str());
        let mut members = BTreeSet::new();
        while let Some(member) = bfs.next(&view) {
            seen.insert(member);
            members.insert(AssetId::from(member));
        }
        islands.push(Island::new(members));
    }

    islands.sort_by(|a, b| {
        a.size
            .cmp(&b.size)
            .then_with(|| a.representative().cmp(&b.representative()))
    });

    tracing::debug!(islands = islands.len(), "detected islands");
    islands
}
