//! `lineage extract` command implementation.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::args::ExtractArgs;
use super::display::{paint_type, short_id, write_ids};
use super::load::load_graph;
use super::Context;
use crate::domain::AssetId;
use crate::graph::Graph;
use crate::output::write_json;
use crate::palette::type_color;

#[derive(Serialize)]
struct ExtractOutput<'a> {
    seeds: &'a [AssetId],
    unknown_seeds: Vec<&'a AssetId>,
    type_colors: BTreeMap<&'a str, &'static str>,
    #[serde(flatten)]
    graph: &'a Graph,
}

/// Run the extract command.
pub fn run<W: Write>(w: &mut W, args: &ExtractArgs, ctx: &Context) -> Result<()> {
    let loaded = load_graph(&args.source, &args.seeds, ctx)?;
    let graph = match &args.node_type {
        Some(node_type) => Cow::Owned(loaded.graph.filter_by_type(node_type)),
        None => Cow::Borrowed(&loaded.graph),
    };

    if ctx.output.json {
        let output = ExtractOutput {
            seeds: &loaded.seeds,
            unknown_seeds: loaded.unknown_seeds(),
            type_colors: graph.types().into_iter().map(|t| (t, type_color(t))).collect(),
            graph: &*graph,
        };
        write_json(w, &output)?;
        return Ok(());
    }

    let display = &ctx.config.display;
    writeln!(
        w,
        "{} from {} seed(s): {} nodes, {} edges",
        "Reachable subgraph".white().bold(),
        loaded.seeds.len(),
        graph.node_count().to_string().green(),
        graph.edge_count().to_string().green()
    )?;
    if let Some(node_type) = &args.node_type {
        writeln!(w, "  {} {}", "type:".dimmed(), paint_type(node_type))?;
    }

    let unknown = loaded.unknown_seeds();
    if !unknown.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}:", "Seeds not in input".yellow())?;
        write_ids(w, unknown.into_iter(), display, "")?;
    }

    writeln!(w)?;
    writeln!(w, "{}:", "Nodes".white().bold())?;
    if graph.is_empty() {
        writeln!(w, "    {}", "(none)".dimmed())?;
    }
    for node in graph.nodes.values().take(display.max_items) {
        let marker = if loaded.seeds.contains(&node.id) {
            " [seed]".cyan().to_string()
        } else {
            String::new()
        };
        writeln!(
            w,
            "    {} {:<width$}  {}  {}{marker}",
            "•".dimmed(),
            short_id(&node.id, display),
            paint_type(&node.node_type),
            format!("in:{} out:{}", node.in_degree, node.out_degree).dimmed(),
            width = display.id_width + 3,
        )?;
    }
    if graph.node_count() > display.max_items {
        writeln!(
            w,
            "    {} ... and {} more",
            "•".dimmed(),
            graph.node_count() - display.max_items
        )?;
    }

    writeln!(w)?;
    writeln!(w, "{}:", "Edges".white().bold())?;
    if graph.edges.is_empty() {
        writeln!(w, "    {}", "(none)".dimmed())?;
    }
    for edge in graph.edges.iter().take(display.max_items) {
        writeln!(
            w,
            "    {} {} {} {}",
            "•".dimmed(),
            short_id(&edge.source, display),
            "->".dimmed(),
            short_id(&edge.target, display)
        )?;
    }
    if graph.edge_count() > display.max_items {
        writeln!(
            w,
            "    {} ... and {} more",
            "•".dimmed(),
            graph.edge_count() - display.max_items
        )?;
    }
    Ok(())
}
