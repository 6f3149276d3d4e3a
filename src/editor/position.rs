//! Conversion between byte offsets and visual columns within a line.
//!
//! Offsets are always char boundaries; visual columns account for tab
//! expansion to the next multiple of the configured tab width, every other
//! rune counting as one column.

use super::store::LineId;

/// A cursor location: a line plus a byte offset in `[0, len]`.
///
/// Positions are transient. Edit operations return the position to use next;
/// a position held across an edit that removed its line must not be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: LineId,
    pub offset: usize,
}

impl Position {
    pub const fn new(line: LineId, offset: usize) -> Self {
        Self { line, offset }
    }
}

/// Visual column of `offset` within `text`.
pub fn visual_col(text: &str, offset: usize, tab_width: usize) -> usize {
    let mut col = 0;
    for ch in text[..offset].chars() {
        col += rune_width(ch, col, tab_width);
    }
    col
}

/// Visual length of the whole line.
pub fn visual_len(text: &str, tab_width: usize) -> usize {
    visual_col(text, text.len(), tab_width)
}

/// Byte offset reached by walking to `target` visual columns.
///
/// Returns the first char boundary whose accumulated width meets or exceeds
/// `target`; a target past the end of the line clamps to the line length.
pub fn byte_offset_at(text: &str, target: usize, tab_width: usize) -> usize {
    let mut col = 0;
    for (offset, ch) in text.char_indices() {
        if col >= target {
            return offset;
        }
        col += rune_width(ch, col, tab_width);
    }
    text.len()
}

/// Byte length of the UTF-8 sequence ending at `offset`, or 0 at the start
/// of the line. Scans back at most 4 bytes for the char boundary.
pub fn rune_size_before(text: &str, offset: usize) -> usize {
    for k in 1..=offset.min(4) {
        if text.is_char_boundary(offset - k) {
            return k;
        }
    }
    0
}

/// Byte length of the UTF-8 sequence starting at `offset`, or 0 at the end
/// of the line.
pub fn rune_size_after(text: &str, offset: usize) -> usize {
    text[offset..].chars().next().map_or(0, char::len_utf8)
}

fn rune_width(ch: char, col: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        tab_width - col % tab_width
    } else {
        1
    }
}
