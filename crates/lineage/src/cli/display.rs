//! Common display utilities for CLI commands.

use std::io::{self, Write};

use colored::{Colorize, CustomColor};

use crate::config::DisplayConfig;
use crate::domain::AssetId;
use crate::palette::{truncate_id, type_color};

/// Write a bulleted list of ids with optional truncation.
///
/// Shows up to `display.max_items` ids. If there are more, shows
/// "... and N more". If empty, shows the provided `empty_message`.
pub fn write_ids<'a, W, I>(
    w: &mut W,
    ids: I,
    display: &DisplayConfig,
    empty_message: &str,
) -> io::Result<()>
where
    W: Write,
    I: ExactSizeIterator<Item = &'a AssetId>,
{
    let total = ids.len();
    if total == 0 {
        return writeln!(w, "    {}", empty_message.dimmed());
    }

    for id in ids.take(display.max_items) {
        writeln!(w, "    {} {}", "•".dimmed(), short_id(id, display))?;
    }

    if total > display.max_items {
        writeln!(
            w,
            "    {} ... and {} more",
            "•".dimmed(),
            total - display.max_items
        )?;
    }
    Ok(())
}

/// An id truncated to the configured width.
pub fn short_id(id: &AssetId, display: &DisplayConfig) -> String {
    truncate_id(id.as_str(), display.id_width)
}

/// A type label painted in its palette colour.
pub fn paint_type(node_type: &str) -> String {
    match parse_hex(type_color(node_type)) {
        Some((r, g, b)) => node_type.custom_color(CustomColor::new(r, g, b)).to_string(),
        None => node_type.to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
