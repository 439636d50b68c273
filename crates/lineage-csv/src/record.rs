//! Relationship records and the CSV column layout they are read from.

use serde::{Deserialize, Serialize};

/// One directed `child -> parent` relationship with the type label of both
/// endpoints.
///
/// Records produced by the reader always have all four fields non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Identifier of the child asset (edge source).
    pub child_id: String,
    /// Identifier of the parent asset (edge target).
    pub parent_id: String,
    /// Type label of the child asset.
    pub child_type: String,
    /// Type label of the parent asset.
    pub parent_type: String,
}

impl RelationshipRecord {
    /// Create a record from its four fields.
    pub fn new(
        child_id: impl Into<String>,
        parent_id: impl Into<String>,
        child_type: impl Into<String>,
        parent_type: impl Into<String>,
    ) -> Self {
        Self {
            child_id: child_id.into(),
            parent_id: parent_id.into(),
            child_type: child_type.into(),
            parent_type: parent_type.into(),
        }
    }
}

/// Header names of the four required CSV columns.
///
/// Columns are matched by exact header name, so extra columns and any column
/// order are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnNames {
    /// Column holding the child id.
    pub child_id: String,
    /// Column holding the parent id.
    pub parent_id: String,
    /// Column holding the child type.
    pub child_type: String,
    /// Column holding the parent type.
    pub parent_type: String,
}

impl ColumnNames {
    /// The column names in record field order.
    #[must_use]
    pub fn as_array(&self) -> [&str; 4] {
        [
            &self.child_id,
            &self.parent_id,
            &self.child_type,
            &self.parent_type,
        ]
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            child_id: "assetId".to_string(),
            parent_id: "parentAssetId".to_string(),
            child_type: "assetType".to_string(),
            parent_type: "parentAssetType".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_match_asset_export_headers() {
        let columns = ColumnNames::default();
        assert_eq!(
            columns.as_array(),
            ["assetId", "parentAssetId", "assetType", "parentAssetType"]
        );
    }
}
