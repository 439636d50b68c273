//! `lineage islands` command implementation.

use std::borrow::Cow;
use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::args::IslandsArgs;
use super::display::write_ids;
use super::load::load_graph;
use super::Context;
use crate::graph::{detect_islands, Island};
use crate::output::write_json;

#[derive(Serialize)]
struct IslandsOutput<'a> {
    node_type: Option<&'a str>,
    count: usize,
    largest: usize,
    islands: &'a [Island],
}

/// Run the islands command.
pub fn run<W: Write>(w: &mut W, args: &IslandsArgs, ctx: &Context) -> Result<()> {
    let loaded = load_graph(&args.source, &args.seeds, ctx)?;
    let graph = match &args.node_type {
        Some(node_type) => Cow::Owned(loaded.graph.filter_by_type(node_type)),
        None => Cow::Borrowed(&loaded.graph),
    };
    let islands = detect_islands(&graph);
    // Sorted ascending, so the largest island is last.
    let largest = islands.last().map_or(0, |i| i.size);

    if ctx.output.json {
        let output = IslandsOutput {
            node_type: args.node_type.as_deref(),
            count: islands.len(),
            largest,
            islands: &islands,
        };
        write_json(w, &output)?;
        return Ok(());
    }

    if islands.is_empty() {
        writeln!(w, "{}", "No islands: the subgraph is empty".dimmed())?;
        return Ok(());
    }

    writeln!(
        w,
        "{} {} island(s) across {} nodes (largest: {})",
        "Found".white().bold(),
        islands.len().to_string().green(),
        graph.node_count(),
        largest
    )?;

    let display = &ctx.config.display;
    for (i, island) in islands.iter().enumerate() {
        let marker = if i + 1 == islands.len() {
            format!(" {}", "largest".green().bold())
        } else {
            String::new()
        };
        writeln!(w)?;
        writeln!(
            w,
            "  {} {} {}{marker}",
            "Island".white().bold(),
            (i + 1).to_string().cyan(),
            format!("({} node{})", island.size, if island.size == 1 { "" } else { "s" }).dimmed()
        )?;
        write_ids(w, island.nodes.iter(), display, "(empty)")?;
    }
    Ok(())
}
