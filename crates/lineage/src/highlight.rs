//! Highlight styles derived from a path classification.
//!
//! The presentation layer applies these styles; nothing here touches a
//! renderer. Styles are a pure function of the graph and classification.

use crate::domain::AssetId;
use crate::graph::{Classification, Edge, Graph};
use serde::Serialize;
use std::collections::BTreeMap;

/// Visual role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    /// Nothing is selected.
    Normal,
    /// The focus node.
    Selected,
    /// An ancestor or descendant of the focus.
    Connected,
    /// Unrelated to the focus.
    Dimmed,
}

/// Visual role of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    /// Nothing is selected.
    Normal,
    /// On a path towards the focus's ancestors.
    AncestorPath,
    /// On a path towards the focus's descendants.
    DescendantPath,
    /// Unrelated to the focus.
    Dimmed,
}

/// Style assignment for every node and edge of a graph.
///
/// Edges are keyed by their [`Edge::key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Style per node id.
    pub nodes: BTreeMap<AssetId, NodeStyle>,
    /// Style per edge key.
    pub edges: BTreeMap<String, EdgeStyle>,
}

impl Highlight {
    /// Every element styled [`NodeStyle::Normal`] / [`EdgeStyle::Normal`].
    #[must_use]
    pub fn none(graph: &Graph) -> Self {
        Self {
            nodes: graph
                .nodes
                .keys()
                .map(|id| (id.clone(), NodeStyle::Normal))
                .collect(),
            edges: graph
                .edges
                .iter()
                .map(|e| (e.key(), EdgeStyle::Normal))
                .collect(),
        }
    }

    /// Style of node `id`, if it belongs to the graph.
    #[must_use]
    pub fn node_style(&self, id: &str) -> Option<NodeStyle> {
        self.nodes.get(id).copied()
    }

    /// Style of `edge`, if it belongs to the graph.
    #[must_use]
    pub fn edge_style(&self, edge: &Edge) -> Option<EdgeStyle> {
        self.edges.get(&edge.key()).copied()
    }

    /// Number of nodes with the given style.
    #[must_use]
    pub fn count_nodes(&self, style: NodeStyle) -> usize {
        self.nodes.values().filter(|s| **s == style).count()
    }

    /// Number of edges with the given style.
    #[must_use]
    pub fn count_edges(&self, style: EdgeStyle) -> usize {
        self.edges.values().filter(|s| **s == style).count()
    }
}

/// Style `graph` around the focus of `classification`.
///
/// The focus is [`NodeStyle::Selected`], its ancestors and descendants are
/// [`NodeStyle::Connected`], everything else is dimmed. An edge in both
/// path families is styled as an ancestor path. If the focus is not in the
/// graph the result is [`Highlight::none`].
#[must_use]
pub fn highlight(graph: &Graph, classification: &Classification) -> Highlight {
    let focus = &classification.focus;
    if !graph.contains(focus.as_str()) {
        return Highlight::none(graph);
    }

    let nodes = graph
        .nodes
        .keys()
        .map(|id| {
            let style = if id == focus {
                NodeStyle::Selected
            } else if classification.ancestors.contains(id)
                || classification.descendants.contains(id)
            {
                NodeStyle::Connected
            } else {
                NodeStyle::Dimmed
            };
            (id.clone(), style)
        })
        .collect();

    let edges = graph
        .edges
        .iter()
        .map(|edge| {
            let style = if classification.ancestor_edges.contains(edge) {
                EdgeStyle::AncestorPath
            } else if classification.descendant_edges.contains(edge) {
                EdgeStyle::DescendantPath
            } else {
                EdgeStyle::Dimmed
            };
            (edge.key(), style)
        })
        .collect();

    Highlight { nodes, edges }
}
