//! Induced subgraphs by node type.

use super::{Graph, Node};
use crate::domain::AssetId;
use std::collections::BTreeSet;

impl Graph {
    /// The subgraph induced by nodes whose type equals `node_type`.
    ///
    /// Edges survive only when both endpoints do. Neighbor sets and degrees
    /// of the surviving nodes are recomputed against the kept set, so the
    /// result has no dangling references.
    #[must_use]
    pub fn filter_by_type(&self, node_type: &str) -> Graph {
        let kept: BTreeSet<&AssetId> = self
            .nodes
            .values()
            .filter(|n| n.node_type == node_type)
            .map(|n| &n.id)
            .collect();

        let restrict = |ids: &BTreeSet<AssetId>| -> BTreeSet<AssetId> {
            ids.iter().filter(|id| kept.contains(id)).cloned().collect()
        };

        let nodes = kept
            .iter()
            .filter_map(|id| self.nodes.get(*id))
            .map(|n| {
                let node = Node::new(
                    n.id.clone(),
                    n.node_type.clone(),
                    restrict(&n.parents),
                    restrict(&n.children),
                );
                (n.id.clone(), node)
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .filter(|e| kept.contains(&e.source) && kept.contains(&e.target))
            .cloned()
            .collect();

        tracing::debug!(node_type, kept = kept.len(), "filtered graph by type");
        Graph { nodes, edges }
    }
}
