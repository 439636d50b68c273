//! Type colours and id truncation for display.

/// Colour palette for node types.
pub const TYPE_PALETTE: [&str; 21] = [
    "#ef4444", // red
    "#10b981", // emerald
    "#3b82f6", // blue
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#84cc16", // lime
    "#f97316", // orange
    "#6366f1", // indigo
    "#14b8a6", // teal
    "#a855f7", // purple
    "#f43f5e", // rose
    "#22c55e", // green
    "#0ea5e9", // sky
    "#d946ef", // fuchsia
    "#fb923c", // orange-400
    "#4ade80", // green-400
    "#60a5fa", // blue-400
    "#c084fc", // purple-400
    "#f472b6", // pink-400
    "#2dd4bf", // teal-400
];

/// Deterministic palette colour for a type label.
///
/// Hashes the UTF-16 code units with `h = c + (h << 5) - h`, where the shift
/// wraps at 32 bits and the accumulator does not, so the mapping matches
/// colours assigned by existing browser-based viewers.
#[must_use]
pub fn type_color(type_label: &str) -> &'static str {
    let mut hash: i64 = 0;
    for unit in type_label.encode_utf16() {
        // Truncation to i32 is the point: the shift operates on 32 bits.
        #[allow(clippy::cast_possible_truncation)]
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        hash = i64::from(unit) + shifted - hash;
    }

    let len = TYPE_PALETTE.len() as u64;
    // `len` is 21, so the remainder always fits.
    #[allow(clippy::cast_possible_truncation)]
    let index = (hash.unsigned_abs() % len) as usize;
    TYPE_PALETTE[index]
}

/// Shorten `id` to at most `max_len` characters followed by `...`.
///
/// Ids that already fit are returned unchanged.
#[must_use]
pub fn truncate_id(id: &str, max_len: usize) -> String {
    match id.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &id[..cut]),
        None => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", "#ef4444")]
    #[case::single_char("A", "#3b82f6")]
    #[case::unknown("Unknown", "#3b82f6")]
    #[case::negative_hash("Server", "#c084fc")]
    #[case::database("Database", "#fb923c")]
    #[case::beyond_i32("Application", "#3b82f6")]
    #[case::positive_overflow("NetworkDevice", "#d946ef")]
    #[case::long_label("a-very-long-type-label-for-overflow", "#84cc16")]
    fn palette_assignment(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(type_color(label), expected);
    }

    #[test]
    fn same_label_same_colour() {
        assert_eq!(type_color("Rack"), type_color("Rack"));
    }

    #[rstest]
    #[case::short("abc", 12, "abc")]
    #[case::exact("abcdefghijkl", 12, "abcdefghijkl")]
    #[case::long("abcdefghijklm", 12, "abcdefghijkl...")]
    #[case::multibyte("ñandú-ñandú", 5, "ñandú...")]
    #[case::zero("abc", 0, "...")]
    fn truncation(#[case] id: &str, #[case] max_len: usize, #[case] expected: &str) {
        assert_eq!(truncate_id(id, max_len), expected);
    }
}
