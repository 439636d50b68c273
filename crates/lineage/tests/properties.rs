//! Property tests over randomly generated relationship sets.
//!
//! Ids are drawn from a small alphabet so that generated inputs are dense
//! with shared ancestors, cycles and self-loops.

use std::collections::BTreeSet;

use lineage::graph::{classify, detect_islands, extract, AdjacencyIndex, Graph};
use lineage::highlight::{highlight, NodeStyle};
use lineage::AssetId;
use lineage_csv::RelationshipRecord;
use proptest::prelude::*;

fn records() -> impl Strategy<Value = Vec<RelationshipRecord>> {
    prop::collection::vec((0u8..10, 0u8..10, 0u8..3, 0u8..3), 0..30).prop_map(|rows| {
        rows.into_iter()
            .map(|(c, p, ct, pt)| {
                RelationshipRecord::new(
                    format!("n{c}"),
                    format!("n{p}"),
                    format!("T{ct}"),
                    format!("T{pt}"),
                )
            })
            .collect()
    })
}

// Two ids past the record alphabet so some seeds are unknown.
fn seeds() -> impl Strategy<Value = Vec<AssetId>> {
    prop::collection::vec(0u8..12, 0..4)
        .prop_map(|ids| ids.into_iter().map(|i| AssetId::new(format!("n{i}"))).collect())
}

fn node_ids(graph: &Graph) -> BTreeSet<AssetId> {
    graph.nodes.keys().cloned().collect()
}

fn assert_no_dangling(graph: &Graph) -> Result<(), TestCaseError> {
    for node in graph.nodes.values() {
        for id in node.parents.iter().chain(&node.children) {
            prop_assert!(graph.contains(id.as_str()), "{} references missing {}", node.id, id);
        }
        prop_assert_eq!(node.in_degree, node.children.len());
        prop_assert_eq!(node.out_degree, node.parents.len());
    }
    for edge in &graph.edges {
        prop_assert!(graph.contains(edge.source.as_str()));
        prop_assert!(graph.contains(edge.target.as_str()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn extraction_is_idempotent(records in records(), seeds in seeds()) {
        let index = AdjacencyIndex::build(&records);
        let first = extract(&seeds, &index);
        let second = extract(&seeds, &index);

        prop_assert_eq!(node_ids(&first), node_ids(&second));
        prop_assert_eq!(first.edge_set(), second.edge_set());
    }

    #[test]
    fn extraction_is_a_union_over_seeds(records in records(), a in seeds(), b in seeds()) {
        let index = AdjacencyIndex::build(&records);
        let combined: Vec<AssetId> = a.iter().chain(&b).cloned().collect();

        let whole = extract(&combined, &index);
        let left = extract(&a, &index);
        let right = extract(&b, &index);

        let union: BTreeSet<AssetId> = node_ids(&left).into_iter().chain(node_ids(&right)).collect();
        prop_assert_eq!(node_ids(&whole), union);

        let edge_union: BTreeSet<_> = left.edge_set().into_iter().chain(right.edge_set()).cloned().collect();
        let whole_edges: BTreeSet<_> = whole.edges.iter().cloned().collect();
        prop_assert_eq!(whole_edges, edge_union);
    }

    #[test]
    fn every_seed_is_a_node(records in records(), seeds in seeds()) {
        let graph = extract(&seeds, &AdjacencyIndex::build(&records));
        for seed in &seeds {
            prop_assert!(graph.contains(seed.as_str()));
        }
    }

    #[test]
    fn edges_are_unique(records in records(), seeds in seeds()) {
        let graph = extract(&seeds, &AdjacencyIndex::build(&records));
        prop_assert_eq!(graph.edge_set().len(), graph.edge_count());
    }

    #[test]
    fn extracted_graphs_have_no_dangling_references(records in records(), seeds in seeds()) {
        let graph = extract(&seeds, &AdjacencyIndex::build(&records));
        assert_no_dangling(&graph)?;
    }

    #[test]
    fn filtered_graphs_have_no_dangling_references(
        records in records(),
        seeds in seeds(),
        node_type in 0u8..3,
    ) {
        let graph = extract(&seeds, &AdjacencyIndex::build(&records));
        let filtered = graph.filter_by_type(&format!("T{node_type}"));
        assert_no_dangling(&filtered)?;
    }

    #[test]
    fn islands_partition_the_graph(records in records(), seeds in seeds()) {
        let graph = extract(&seeds, &AdjacencyIndex::build(&records));
        let islands = detect_islands(&graph);

        let mut seen = BTreeSet::new();
        for island in &islands {
            prop_assert_eq!(island.size, island.nodes.len());
            for id in &island.nodes {
                prop_assert!(seen.insert(id.clone()), "{} is in two islands", id);
            }
        }
        prop_assert_eq!(seen, node_ids(&graph));
    }

    #[test]
    fn islands_are_ordered(records in records(), seeds in seeds()) {
        let graph = extract(&seeds, &AdjacencyIndex::build(&records));
        let islands = detect_islands(&graph);

        for pair in islands.windows(2) {
            let key = |i: &lineage::graph::Island| (i.size, i.representative().cloned());
            prop_assert!(key(&pair[0]) < key(&pair[1]));
        }
    }

    #[test]
    fn focus_is_never_its_own_relative(records in records(), seeds in seeds(), focus in 0u8..12) {
        let graph = extract(&seeds, &AdjacencyIndex::build(&records));
        let focus = format!("n{focus}");
        let paths = classify(&focus, &graph);

        prop_assert!(!paths.ancestors.contains(focus.as_str()));
        prop_assert!(!paths.descendants.contains(focus.as_str()));

        let edges = graph.edge_set();
        for edge in paths.ancestor_edges.iter().chain(&paths.descendant_edges) {
            prop_assert!(edges.contains(edge));
        }
    }

    #[test]
    fn highlight_styles_every_node_once(records in records(), seeds in seeds(), focus in 0u8..12) {
        let graph = extract(&seeds, &AdjacencyIndex::build(&records));
        let focus = format!("n{focus}");
        let styles = highlight(&graph, &classify(&focus, &graph));

        prop_assert_eq!(styles.nodes.len(), graph.node_count());
        prop_assert_eq!(styles.edges.len(), graph.edge_count());

        let selected = styles.count_nodes(NodeStyle::Selected);
        prop_assert_eq!(selected, usize::from(graph.contains(&focus)));
    }
}
