//! `lineage paths` command implementation.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::args::PathsArgs;
use super::display::{paint_type, write_ids};
use super::load::load_graph;
use super::Context;
use crate::domain::AssetId;
use crate::graph::{classify, Classification};
use crate::highlight::{highlight, EdgeStyle, Highlight, NodeStyle};
use crate::output::write_json;

#[derive(Serialize)]
struct PathsOutput<'a> {
    found: bool,
    #[serde(flatten)]
    classification: &'a Classification,
    shared: Vec<&'a AssetId>,
    highlight: &'a Highlight,
}

/// Run the paths command.
pub fn run<W: Write>(w: &mut W, args: &PathsArgs, ctx: &Context) -> Result<()> {
    let loaded = load_graph(&args.source, &args.seeds, ctx)?;
    let graph = &loaded.graph;
    let focus = args.focus.trim();

    let found = graph.contains(focus);
    if !found {
        tracing::warn!(focus, "focus node is not in the reachable subgraph");
    }

    let classification = classify(focus, graph);
    let styles = highlight(graph, &classification);
    let shared: Vec<&AssetId> = classification.shared().into_iter().collect();

    if ctx.output.json {
        let output = PathsOutput {
            found,
            classification: &classification,
            shared,
            highlight: &styles,
        };
        write_json(w, &output)?;
        return Ok(());
    }

    let Some(node) = graph.node(focus) else {
        writeln!(
            w,
            "\"{}\" {}",
            focus.cyan(),
            "is not in the reachable subgraph".dimmed()
        )?;
        return Ok(());
    };

    writeln!(
        w,
        "{} \"{}\" ({}):",
        "Paths through".white().bold(),
        focus.cyan().bold(),
        paint_type(&node.node_type)
    )?;

    let display = &ctx.config.display;
    writeln!(w)?;
    writeln!(
        w,
        "  {} ({}):",
        "Ancestors".white().bold(),
        classification.ancestors.len()
    )?;
    write_ids(w, classification.ancestors.iter(), display, "(none)")?;

    writeln!(w)?;
    writeln!(
        w,
        "  {} ({}):",
        "Descendants".white().bold(),
        classification.descendants.len()
    )?;
    write_ids(w, classification.descendants.iter(), display, "(none)")?;

    if !shared.is_empty() {
        writeln!(w)?;
        writeln!(
            w,
            "  {} ({}):",
            "On a cycle with the focus".yellow().bold(),
            shared.len()
        )?;
        write_ids(w, shared.into_iter(), display, "")?;
    }

    writeln!(w)?;
    writeln!(
        w,
        "{}: {} ancestor-path edges, {} descendant-path edges, {} dimmed",
        "Edges".dimmed(),
        styles.count_edges(EdgeStyle::AncestorPath).to_string().green(),
        styles.count_edges(EdgeStyle::DescendantPath).to_string().blue(),
        styles.count_edges(EdgeStyle::Dimmed)
    )?;
    writeln!(
        w,
        "{}: {} connected, {} dimmed",
        "Nodes".dimmed(),
        styles.count_nodes(NodeStyle::Connected).to_string().green(),
        styles.count_nodes(NodeStyle::Dimmed)
    )?;
    Ok(())
}
