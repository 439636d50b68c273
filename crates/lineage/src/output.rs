//! Output configuration and JSON emission for CLI commands.

use serde::Serialize;
use std::env;
use std::io::{self, Write};

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
    /// Emit JSON instead of text.
    pub json: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `LINEAGE_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env(json: bool) -> Self {
        let no_color = env::var("NO_COLOR").ok();
        let lineage_color = env::var("LINEAGE_COLOR").ok();
        Self::from_vars(no_color.as_deref(), lineage_color.as_deref(), json)
    }

    fn from_vars(no_color: Option<&str>, lineage_color: Option<&str>, json: bool) -> Self {
        let use_colors = match lineage_color {
            _ if no_color.is_some() => false,
            None => true,
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") || v.is_empty() => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "LINEAGE_COLOR",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                true
            }
        };

        Self {
            use_colors: use_colors && !json,
            json,
        }
    }

    /// Apply the colour setting process-wide.
    pub fn apply(&self) {
        colored::control::set_override(self.use_colors);
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            json: false,
        }
    }
}

/// Write `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, None, true)]
    #[case::no_color_wins(Some(""), Some("1"), false)]
    #[case::explicit_off(None, Some("0"), false)]
    #[case::explicit_false(None, Some("FALSE"), false)]
    #[case::explicit_on(None, Some("true"), true)]
    #[case::garbage_falls_back(None, Some("maybe"), true)]
    fn colour_resolution(
        #[case] no_color: Option<&str>,
        #[case] lineage_color: Option<&str>,
        #[case] expected: bool,
    ) {
        let config = OutputConfig::from_vars(no_color, lineage_color, false);
        assert_eq!(config.use_colors, expected);
    }

    #[test]
    fn json_output_never_coloured() {
        let config = OutputConfig::from_vars(None, Some("1"), true);
        assert!(!config.use_colors);
        assert!(config.json);
    }

    #[test]
    fn write_json_appends_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!({"nodes": 3})).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"nodes\": 3"));
    }
}
