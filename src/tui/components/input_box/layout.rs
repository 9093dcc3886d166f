//! Line layout for the input box.
//!
//! The draft is hard-wrapped by display width (no word wrapping) so the
//! cursor maps onto the screen with simple arithmetic. Line ranges are byte
//! ranges into the buffer and always fall on char boundaries.

use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 4;
/// Offset from area edge to content (border + left padding)
pub(super) const CONTENT_OFFSET: u16 = 2;

/// Inner content width for an outer width. 0 if the area is too narrow.
pub(super) fn inner_width(outer_width: u16) -> u16 {
    outer_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Split `text` into byte ranges no wider than `width` columns.
///
/// Always returns at least one (possibly empty) range.
pub(super) fn wrap_ranges(text: &str, width: u16) -> Vec<Range<usize>> {
    let width = usize::from(width.max(1));
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut line_width = 0;

    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if line_width + w > width && i > start {
            ranges.push(start..i);
            start = i;
            line_width = 0;
        }
        line_width += w;
    }
    ranges.push(start..text.len());
    ranges
}

/// Row and column of the cursor at byte offset `pos`.
///
/// A cursor sitting right after a full line moves to the start of the next
/// row, where the next typed character will land.
pub(super) fn cursor_position(text: &str, pos: usize, width: u16) -> (u16, u16) {
    let ranges = wrap_ranges(text, width);
    let row = ranges
        .iter()
        .position(|r| pos < r.end)
        .unwrap_or(ranges.len() - 1);
    let col: usize = text[ranges[row].start..pos]
        .chars()
        .map(|c| c.width().unwrap_or(0))
        .sum();

    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    if col >= width.max(1) {
        (row.saturating_add(1), 0)
    } else {
        (row, col)
    }
}

/// Byte offset of the char boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

/// Byte offset of the char boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}
