//! Multi-seed bidirectional subgraph extraction.

use super::{AdjacencyIndex, Edge, Graph, Node};
use crate::domain::{AssetId, UNKNOWN_TYPE};
use petgraph::Direction;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Extract everything ancestor- or descendant-reachable from any seed.
///
/// For each seed present in `index`, one BFS follows child → parent edges
/// (ancestors) and one follows them in reverse (descendants). All traversals
/// share a single reachable set and a single pair-deduplicated edge set, so
/// the result is the union over seeds.
///
/// A seed absent from `index` is added as an isolated node of type
/// [`UNKNOWN_TYPE`]. Every seed is always a node of the result.
///
/// Each node's `parents`/`children` are its full adjacency restricted to the
/// reachable set, so the returned graph has no dangling references.
///
/// # Complexity
///
/// A node already expanded in one direction by an earlier seed is not
/// expanded in that direction again: its whole reach that way is already
/// recorded. Total work is O(V + E) regardless of the number of seeds.
#[must_use]
pub fn extract(seeds: &[AssetId], index: &AdjacencyIndex) -> Graph {
    let mut walk = Walk::new(index);

    for seed in seeds {
        walk.reachable.insert(seed);
        if index.contains(seed.as_str()) {
            walk.traverse(seed, Direction::Outgoing);
            walk.traverse(seed, Direction::Incoming);
        } else {
            tracing::trace!(seed = %seed, "seed not present in records");
        }
    }

    let graph = walk.into_graph();
    tracing::debug!(
        seeds = seeds.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "extracted subgraph"
    );
    graph
}

/// Accumulated state shared by every traversal of one extraction.
struct Walk<'a> {
    index: &'a AdjacencyIndex,
    reachable: BTreeSet<&'a AssetId>,
    edges: Vec<(&'a AssetId, &'a AssetId)>,
    edge_set: HashSet<(&'a AssetId, &'a AssetId)>,
    /// Nodes already expanded towards ancestors / descendants.
    expanded_up: HashSet<&'a AssetId>,
    expanded_down: HashSet<&'a AssetId>,
}

impl<'a> Walk<'a> {
    fn new(index: &'a AdjacencyIndex) -> Self {
        Self {
            index,
            reachable: BTreeSet::new(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
            expanded_up: HashSet::new(),
            expanded_down: HashSet::new(),
        }
    }

    /// BFS from `start`, recording every traversed edge child → parent.
    fn traverse(&mut self, start: &'a AssetId, direction: Direction) {
        let index = self.index;
        let mut queue: VecDeque<&'a AssetId> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            let expanded = match direction {
                Direction::Outgoing => &mut self.expanded_up,
                Direction::Incoming => &mut self.expanded_down,
            };
            if !expanded.insert(current) {
                continue;
            }
            self.reachable.insert(current);

            let Some(neighbors) = index.neighbors(current.as_str(), direction) else {
                continue;
            };

            for neighbor in neighbors {
                let pair = match direction {
                    Direction::Outgoing => (current, neighbor),
                    Direction::Incoming => (neighbor, current),
                };
                if self.edge_set.insert(pair) {
                    self.edges.push(pair);
                }
                if !expanded.contains(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    fn into_graph(self) -> Graph {
        let restrict = |id: &AssetId, direction| -> BTreeSet<AssetId> {
            self.index
                .neighbors(id.as_str(), direction)
                .into_iter()
                .flatten()
                .filter(|n| self.reachable.contains(n))
                .cloned()
                .collect()
        };

        let nodes = self
            .reachable
            .iter()
            .map(|&id| {
                let node_type = self.index.type_of(id.as_str()).unwrap_or(UNKNOWN_TYPE);
                let node = Node::new(
                    id.clone(),
                    node_type,
                    restrict(id, Direction::Outgoing),
                    restrict(id, Direction::Incoming),
                );
                (id.clone(), node)
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .map(|&(source, target)| Edge::new(source.clone(), target.clone()))
            .collect();

        Graph { nodes, edges }
    }
}
