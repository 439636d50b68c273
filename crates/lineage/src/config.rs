//! Configuration management for lineage.
//!
//! Configuration lives in an optional YAML file, `lineage.yaml` in the
//! working directory unless a path is given explicitly. Every key is
//! optional; missing keys take their defaults.
//!
//! ```yaml
//! columns:
//!   child_id: assetId
//!   parent_id: parentAssetId
//!   child_type: assetType
//!   parent_type: parentAssetType
//! display:
//!   id_width: 12
//!   max_items: 20
//! ```

use crate::error::{Error, Result};
use lineage_csv::{ColumnNames, IngestReport};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "lineage.yaml";

/// Default number of id characters shown before truncation.
pub const DEFAULT_ID_WIDTH: usize = 12;

/// Default number of items listed per section in text output.
pub const DEFAULT_MAX_ITEMS: usize = 20;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineageConfig {
    /// CSV header names of the four required columns.
    pub columns: ColumnNames,

    /// Text output settings.
    pub display: DisplayConfig,
}

/// Text output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Ids longer than this are truncated in text output.
    pub id_width: usize,

    /// Maximum items listed per section before summarising the rest.
    pub max_items: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            id_width: DEFAULT_ID_WIDTH,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl LineageConfig {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not valid configuration YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed YAML, unknown keys, or a zero
    /// `display.max_items`.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`CONFIG_FILE_NAME`] in
    /// `dir` is used when present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading configuration");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Read a relationship CSV using the configured column names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Ingest`] if the file cannot be opened or its header
    /// row cannot be read. Bad data rows are reported as warnings instead.
    pub fn read_source(&self, path: &Path) -> Result<IngestReport> {
        Ok(lineage_csv::read_path(path, self.columns.clone())?)
    }

    fn validate(&self) -> Result<()> {
        if self.display.max_items == 0 {
            return Err(Error::Config(
                "display.max_items must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = LineageConfig::default();
        assert_eq!(config.columns, ColumnNames::default());
        assert_eq!(config.display.id_width, DEFAULT_ID_WIDTH);
        assert_eq!(config.display.max_items, DEFAULT_MAX_ITEMS);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = LineageConfig::from_yaml("columns:\n  child_id: id\ndisplay:\n  id_width: 8\n")
            .unwrap();

        assert_eq!(config.columns.child_id, "id");
        assert_eq!(config.columns.parent_id, "parentAssetId");
        assert_eq!(config.display.id_width, 8);
        assert_eq!(config.display.max_items, DEFAULT_MAX_ITEMS);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(LineageConfig::from_yaml("\n").unwrap(), LineageConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = LineageConfig::from_yaml("colums:\n  child_id: id\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn zero_max_items_is_rejected() {
        let err = LineageConfig::from_yaml("display:\n  max_items: 0\n").unwrap_err();
        assert!(err.to_string().contains("max_items"));
    }

    #[test]
    fn discover_prefers_explicit_path() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("custom.yaml");
        fs::write(&explicit, "display:\n  max_items: 3\n").unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "display:\n  max_items: 9\n").unwrap();

        let config = LineageConfig::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.display.max_items, 3);
    }

    #[test]
    fn discover_reads_working_directory_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "display:\n  max_items: 9\n").unwrap();

        let config = LineageConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.display.max_items, 9);
    }

    #[test]
    fn discover_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = LineageConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config, LineageConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.yaml");

        let err = LineageConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn read_source_uses_configured_columns() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("rel.csv");
        fs::write(&csv, "id,parent,kind,parentKind\na,b,T,U\n").unwrap();

        let config = LineageConfig::from_yaml(
            "columns:\n  child_id: id\n  parent_id: parent\n  child_type: kind\n  parent_type: parentKind\n",
        )
        .unwrap();
        let report = config.read_source(&csv).unwrap();

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].parent_type, "U");
    }

    #[test]
    fn read_source_missing_file_is_ingest_error() {
        let dir = TempDir::new().unwrap();
        let err = LineageConfig::default()
            .read_source(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert!(matches!(err, Error::Ingest(_)));
    }

    #[test]
    fn yaml_round_trip_uses_section_names() {
        let yaml = serde_yaml::to_string(&LineageConfig::default()).unwrap();
        assert!(yaml.contains("columns:"));
        assert!(yaml.contains("child_id: assetId"));
        assert!(yaml.contains("id_width: 12"));
    }
}
