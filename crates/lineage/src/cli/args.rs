//! Argument structs for each subcommand.

use clap::Args;
use std::path::PathBuf;

/// The relationship CSV to read.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Relationship CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Where seed ids come from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SeedArgs {
    /// Seed ids, separated by commas or newlines
    #[arg(short, long, value_name = "IDS")]
    pub seeds: Option<String>,

    /// Read seed ids from a file ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub seeds_file: Option<PathBuf>,
}

/// Arguments for the stats command.
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Input file.
    #[command(flatten)]
    pub source: SourceArgs,

    /// List every warning instead of the first `display.max_items`
    #[arg(long)]
    pub all_warnings: bool,
}

/// Arguments for the extract command.
#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Input file.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Seed ids.
    #[command(flatten)]
    pub seeds: SeedArgs,

    /// Keep only nodes of this type (and edges between them)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub node_type: Option<String>,
}

/// Arguments for the islands command.
#[derive(Args, Debug, Clone)]
pub struct IslandsArgs {
    /// Input file.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Seed ids.
    #[command(flatten)]
    pub seeds: SeedArgs,

    /// Detect islands among nodes of this type only
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub node_type: Option<String>,
}

/// Arguments for the paths command.
#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Input file.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Seed ids.
    #[command(flatten)]
    pub seeds: SeedArgs,

    /// Node to classify paths around
    #[arg(short, long, value_name = "ID")]
    pub focus: String,
}
