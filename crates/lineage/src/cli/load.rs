//! Shared input loading for the graph commands.

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context as _, Result};
use lineage_csv::IngestReport;

use super::args::{SeedArgs, SourceArgs};
use super::Context;
use crate::domain::AssetId;
use crate::graph::{extract, AdjacencyIndex, Graph};
use crate::seeds::parse_seeds;

/// Everything a graph command needs after loading its inputs.
pub struct Loaded {
    pub seeds: Vec<AssetId>,
    pub index: AdjacencyIndex,
    pub graph: Graph,
}

impl Loaded {
    /// Seeds that never appeared in the input.
    pub fn unknown_seeds(&self) -> Vec<&AssetId> {
        self.seeds
            .iter()
            .filter(|s| !self.index.contains(s.as_str()))
            .collect()
    }
}

/// Read the relationship CSV, logging any row-level warnings.
pub fn read_source(source: &SourceArgs, ctx: &Context) -> Result<IngestReport> {
    let report = ctx
        .config
        .read_source(&source.file)
        .with_context(|| format!("failed to read {}", source.file.display()))?;

    for warning in &report.warnings {
        tracing::warn!(kind = warning.kind(), "{warning}");
    }
    tracing::info!(
        rows = report.stats.total_rows,
        invalid = report.stats.invalid_rows,
        nodes = report.stats.unique_nodes,
        edges = report.stats.unique_edges,
        "loaded relationships"
    );
    Ok(report)
}

/// Resolve the seed list from `--seeds` or `--seeds-file`.
pub fn read_seeds(args: &SeedArgs) -> Result<Vec<AssetId>> {
    let text = match (&args.seeds, &args.seeds_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read seeds from stdin")?;
            buf
        }
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read seeds file {}", path.display()))?,
        (None, None) => bail!("no seed source given"),
    };

    let seeds = parse_seeds(&text);
    if seeds.is_empty() {
        bail!("no seed ids found");
    }
    Ok(seeds)
}

/// Load the CSV and seeds, then extract the reachable subgraph.
pub fn load_graph(source: &SourceArgs, seeds: &SeedArgs, ctx: &Context) -> Result<Loaded> {
    let report = read_source(source, ctx)?;
    let seeds = read_seeds(seeds)?;

    let index = AdjacencyIndex::build(&report.records);
    let graph = extract(&seeds, &index);

    let loaded = Loaded {
        seeds,
        index,
        graph,
    };
    for seed in loaded.unknown_seeds() {
        tracing::warn!(seed = %seed, "seed not found in input");
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn inline(text: &str) -> SeedArgs {
        SeedArgs {
            seeds: Some(text.to_string()),
            seeds_file: None,
        }
    }

    #[test]
    fn inline_seeds_are_parsed() {
        let seeds = read_seeds(&inline(" a, b\nc ,")).unwrap();
        let ids: Vec<_> = seeds.iter().map(AssetId::as_str).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn blank_seed_text_is_an_error() {
        let err = read_seeds(&inline(" ,\n ")).unwrap_err();
        assert!(err.to_string().contains("no seed ids"));
    }

    #[test]
    fn seeds_file_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seeds.txt");
        fs::write(&path, "x\r\ny\n").unwrap();

        let seeds = read_seeds(&SeedArgs {
            seeds: None,
            seeds_file: Some(path),
        })
        .unwrap();
        assert_eq!(seeds, vec![AssetId::from("x"), AssetId::from("y")]);
    }

    #[test]
    fn missing_seeds_file_names_the_path() {
        let err = read_seeds(&SeedArgs {
            seeds: None,
            seeds_file: Some(PathBuf::from("/nonexistent/seeds.txt")),
        })
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seeds.txt"));
    }

    #[test]
    fn load_graph_reports_unknown_seeds() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("rel.csv");
        fs::write(
            &csv,
            "assetId,parentAssetId,assetType,parentAssetType\nX,Y,A,B\n",
        )
        .unwrap();

        let loaded = load_graph(
            &SourceArgs { file: csv },
            &inline("X,Q"),
            &Context::default(),
        )
        .unwrap();

        assert_eq!(loaded.graph.node_count(), 3);
        assert_eq!(loaded.unknown_seeds(), vec![&AssetId::from("Q")]);
    }
}
