//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `stats`: Summarise a relationship CSV (rows, nodes, edges, invalid rows, types)
//! - `extract`: Show the subgraph reachable from a set of seed ids
//! - `islands`: Split the reachable subgraph into connected islands
//! - `paths`: Classify ancestor/descendant paths around a focus node
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`: Configuration file (defaults to `./lineage.yaml` when present)
//! - `-v`: Verbose logging, repeatable
//!
//! # Example
//!
//! ```bash
//! lineage stats assets.csv
//! lineage extract assets.csv --seeds "web-01,web-02"
//! lineage islands assets.csv --seeds-file seeds.txt --type Server
//! lineage paths assets.csv --seeds web-01 --focus rack-7 --json
//! ```

mod args;
mod display;
mod extract;
mod islands;
mod load;
mod paths;
mod stats;

pub use args::{ExtractArgs, IslandsArgs, PathsArgs, SeedArgs, SourceArgs, StatsArgs};

use crate::config::LineageConfig;
use crate::output::OutputConfig;
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

/// Lineage - reachability analysis over asset relationships
///
/// Reads a CSV of child/parent asset relationships and answers which assets
/// are reachable from a set of seeds, how they group into islands, and which
/// paths run through a chosen asset.
#[derive(Parser, Debug)]
#[command(name = "lineage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./lineage.yaml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Summarise a relationship CSV
    ///
    /// Reports total and invalid rows, unique nodes and edges, and the type
    /// labels found. Invalid rows are listed as warnings.
    Stats(StatsArgs),

    /// Extract the subgraph reachable from seed ids
    ///
    /// Follows parent links (ancestors) and child links (descendants) from
    /// every seed and shows the union.
    Extract(ExtractArgs),

    /// List islands of the reachable subgraph
    ///
    /// Islands are connected components ignoring edge direction, listed from
    /// smallest to largest.
    Islands(IslandsArgs),

    /// Classify paths through a focus node
    ///
    /// Shows the focus node's ancestors and descendants within the reachable
    /// subgraph, the edges on each path family, and the resulting styles.
    Paths(PathsArgs),
}

/// Settings shared by every command run.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Resolved configuration.
    pub config: LineageConfig,
    /// Output format and colour settings.
    pub output: OutputConfig,
}

impl Cli {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Tracing filter implied by the `-v` count.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Resolve configuration and run the selected command against stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or input cannot be loaded, or if
    /// writing output fails.
    pub fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        let config = LineageConfig::discover(self.config.as_deref(), &cwd)
            .context("failed to load configuration")?;
        let output = OutputConfig::from_env(self.json);
        output.apply();

        let ctx = Context { config, output };
        let stdout = io::stdout();
        let mut w = stdout.lock();
        run_command(&mut w, &self.command, &ctx)?;
        w.flush()?;
        Ok(())
    }
}

/// Run one command, writing its output to `w`.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or writing fails.
pub fn run_command<W: Write>(w: &mut W, command: &Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Stats(args) => stats::run(w, args, ctx),
        Commands::Extract(args) => extract::run(w, args, ctx),
        Commands::Islands(args) => islands::run(w, args, ctx),
        Commands::Paths(args) => paths::run(w, args, ctx),
    }
}
