//! `lineage stats` command implementation.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use lineage_csv::{IngestStats, Warning};
use serde::Serialize;

use super::args::StatsArgs;
use super::display::paint_type;
use super::load::read_source;
use super::Context;
use crate::output::write_json;

#[derive(Serialize)]
struct StatsOutput<'a> {
    #[serde(flatten)]
    stats: &'a IngestStats,
    warnings: Vec<WarningView<'a>>,
}

#[derive(Serialize)]
struct WarningView<'a> {
    kind: &'a str,
    line: Option<u64>,
    message: String,
}

impl<'a> From<&'a Warning> for WarningView<'a> {
    fn from(warning: &'a Warning) -> Self {
        Self {
            kind: warning.kind(),
            line: warning.line_number(),
            message: warning.to_string(),
        }
    }
}

/// Run the stats command.
pub fn run<W: Write>(w: &mut W, args: &StatsArgs, ctx: &Context) -> Result<()> {
    let report = read_source(&args.source, ctx)?;

    if ctx.output.json {
        let output = StatsOutput {
            stats: &report.stats,
            warnings: report.warnings.iter().map(WarningView::from).collect(),
        };
        write_json(w, &output)?;
        return Ok(());
    }

    let stats = &report.stats;
    writeln!(
        w,
        "{} {}",
        "Relationships in".white().bold(),
        args.source.file.display().to_string().cyan().bold()
    )?;
    writeln!(w)?;
    writeln!(w, "  {:<14}{}", "Rows:", stats.total_rows)?;
    writeln!(w, "  {:<14}{}", "Valid rows:", stats.valid_rows())?;
    let invalid = stats.invalid_rows.to_string();
    let invalid = if stats.invalid_rows > 0 {
        invalid.yellow()
    } else {
        invalid.green()
    };
    writeln!(w, "  {:<14}{}", "Invalid rows:", invalid)?;
    writeln!(w, "  {:<14}{}", "Nodes:", stats.unique_nodes)?;
    writeln!(w, "  {:<14}{}", "Edges:", stats.unique_edges)?;

    let types: Vec<String> = stats.types.iter().map(|t| paint_type(t)).collect();
    writeln!(
        w,
        "  {:<14}{}",
        format!("Types ({}):", types.len()),
        if types.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            types.join(", ")
        }
    )?;

    if !report.warnings.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}:", "Warnings".yellow().bold())?;
        let limit = if args.all_warnings {
            report.warnings.len()
        } else {
            ctx.config.display.max_items
        };
        for warning in report.warnings.iter().take(limit) {
            writeln!(w, "  {} {warning}", "•".dimmed())?;
        }
        if report.warnings.len() > limit {
            writeln!(
                w,
                "  {} ... and {} more (use --all-warnings to list them)",
                "•".dimmed(),
                report.warnings.len() - limit
            )?;
        }
    }
    Ok(())
}
