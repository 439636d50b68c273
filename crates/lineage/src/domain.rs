//! Domain types shared by every stage of the graph engine.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Type label given to ids that never appear with a type in the source data.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Unique identifier for an asset node.
///
/// Ordering is the natural string ordering, which the engine relies on for
/// reproducible iteration and tie-breaking.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Create a new asset ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for AssetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn lookups_by_str() {
        let ids: BTreeSet<AssetId> = ["b", "a"].into_iter().map(AssetId::from).collect();
        assert!(ids.contains("a"));
        assert!(!ids.contains("c"));
    }

    #[test]
    fn ordering_is_string_ordering() {
        let mut ids = vec![AssetId::from("b10"), AssetId::from("b2"), AssetId::from("B")];
        ids.sort();
        assert_eq!(ids, ["B", "b10", "b2"].map(AssetId::from));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&AssetId::new("rack-7")).unwrap();
        assert_eq!(json, "\"rack-7\"");
    }
}
