//! Ancestor/descendant path classification around a focus node.

use super::{Edge, Graph};
use crate::domain::AssetId;
use petgraph::Direction;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Nodes and edges on the ancestor and descendant paths of a focus node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The node the classification is centred on.
    pub focus: AssetId,
    /// Nodes reachable by following parent links from the focus.
    pub ancestors: BTreeSet<AssetId>,
    /// Nodes reachable by following child links from the focus.
    pub descendants: BTreeSet<AssetId>,
    /// Edges on paths between the focus and its ancestors.
    pub ancestor_edges: BTreeSet<Edge>,
    /// Edges on paths between the focus and its descendants.
    pub descendant_edges: BTreeSet<Edge>,
}

impl Classification {
    /// Nodes that are both ancestors and descendants of the focus.
    ///
    /// Non-empty only when the focus lies on a cycle.
    #[must_use]
    pub fn shared(&self) -> BTreeSet<&AssetId> {
        self.ancestors.intersection(&self.descendants).collect()
    }

    /// Returns `true` if the focus has no ancestors and no descendants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ancestors.is_empty() && self.descendants.is_empty()
    }
}

/// Classify the paths through `focus` in `graph`.
///
/// `ancestors` and `descendants` never contain `focus` itself. An edge joins
/// `ancestor_edges` when it runs focus → ancestor, ancestor → ancestor, or
/// ancestor → focus, and `descendant_edges` under the same rule with
/// descendants. The two tests are independent, so an edge can land in both
/// sets when the focus is part of a cycle.
///
/// A focus that is not a node of `graph` yields empty sets.
#[must_use]
pub fn classify(focus: &str, graph: &Graph) -> Classification {
    let mut result = Classification {
        focus: AssetId::from(focus),
        ..Classification::default()
    };

    if !graph.contains(focus) {
        tracing::debug!(focus, "focus not in graph; nothing to classify");
        return result;
    }

    result.ancestors = reach(graph, focus, Direction::Outgoing);
    result.descendants = reach(graph, focus, Direction::Incoming);

    for edge in &graph.edges {
        if on_path(edge, focus, &result.ancestors) {
            result.ancestor_edges.insert(edge.clone());
        }
        if on_path(edge, focus, &result.descendants) {
            result.descendant_edges.insert(edge.clone());
        }
    }

    tracing::trace!(
        focus,
        ancestors = result.ancestors.len(),
        descendants = result.descendants.len(),
        "classified paths"
    );
    result
}

/// BFS over node links in `direction`, excluding the start node.
fn reach(graph: &Graph, start: &str, direction: Direction) -> BTreeSet<AssetId> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        let Some(node) = graph.node(current) else {
            continue;
        };
        for next in node.neighbors(direction) {
            if !visited.contains(next.as_str()) {
                queue.push_back(next.as_str());
            }
        }
    }

    visited.remove(start);
    visited.into_iter().map(AssetId::from).collect()
}

fn on_path(edge: &Edge, focus: &str, family: &BTreeSet<AssetId>) -> bool {
    let source = edge.source.as_str();
    let target = edge.target.as_str();
    let source_in = family.contains(source);
    let target_in = family.contains(target);

    (source == focus && target_in) || (source_in && target_in) || (source_in && target == focus)
}
