//! Seed list parsing.

use crate::domain::AssetId;

/// Parse a free-text seed list.
///
/// Ids are separated by commas or newlines; surrounding whitespace is
/// trimmed and empty tokens are dropped. Order and duplicates are kept,
/// extraction treats the list as a set anyway.
///
/// ```
/// use lineage::seeds::parse_seeds;
///
/// let seeds = parse_seeds(" web-01, rack-7\n\n,db-3 \r\n");
/// let ids: Vec<_> = seeds.iter().map(|s| s.as_str()).collect();
/// assert_eq!(ids, ["web-01", "rack-7", "db-3"]);
/// ```
#[must_use]
pub fn parse_seeds(input: &str) -> Vec<AssetId> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(AssetId::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parsed(input: &str) -> Vec<String> {
        parse_seeds(input)
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    #[rstest]
    #[case::empty("", &[])]
    #[case::only_separators(",\n , \n", &[])]
    #[case::single("a", &["a"])]
    #[case::commas("a,b,c", &["a", "b", "c"])]
    #[case::newlines("a\nb\r\nc", &["a", "b", "c"])]
    #[case::mixed_with_spaces("  a , b\n\tc  ", &["a", "b", "c"])]
    #[case::duplicates_kept("a,a", &["a", "a"])]
    #[case::inner_spaces_kept("rack 7, web 01", &["rack 7", "web 01"])]
    fn seed_parsing(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(parsed(input), expected);
    }
}
