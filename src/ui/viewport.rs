//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks the first visible soft-wrap row of the buffer
//! and follows the cursor. A logical line whose visual length exceeds the
//! terminal width wraps across several rows, so the top of the window is a
//! `(line, row-within-line)` pair rather than a bare line index.

/// The visible window of terminal rows over the buffer.
///
/// Re-derived each frame from the cursor position and the previous top;
/// it owns no buffer data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    top_line: usize,
    top_row: usize,
}

impl Viewport {
    /// Create a viewport at the top of the buffer.
    ///
    /// `width` is the terminal width in columns, `height` the number of
    /// text rows (the status line is not part of the viewport).
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            top_line: 0,
            top_row: 0,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Line index of the first visible row.
    pub const fn top_line(&self) -> usize {
        self.top_line
    }

    /// Soft-wrap row within the top line at which display starts.
    pub const fn top_row(&self) -> usize {
        self.top_row
    }

    /// Rows a line of the given visual length occupies at `width` columns.
    /// An empty line still takes one row; a line exactly as wide as the
    /// terminal spills one empty row so the cursor can sit past its end.
    pub const fn rows_in_line(width: u16, visual_len: usize) -> usize {
        let width = if width == 0 { 1 } else { width as usize };
        visual_len / width + 1
    }

    /// Resize to new terminal dimensions.
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Scroll so the cursor row is visible.
    ///
    /// `rows_of` maps a line index to its soft-wrap row count and
    /// `cursor_row` is the cursor's row within its own line. A top that no
    /// longer exists (after deletions) is clamped first; then the top
    /// either snaps up to the cursor or advances one soft-wrap row at a
    /// time until the cursor fits in the window.
    pub fn scroll_to_cursor(
        &mut self,
        rows_of: impl Fn(usize) -> usize,
        total_lines: usize,
        cursor_line: usize,
        cursor_row: usize,
    ) {
        if total_lines == 0 || self.height == 0 {
            return;
        }
        if self.top_line >= total_lines {
            self.top_line = total_lines - 1;
            self.top_row = 0;
        }
        if self.top_row >= rows_of(self.top_line) {
            self.top_row = 0;
        }
        if cursor_line < self.top_line
            || (cursor_line == self.top_line && cursor_row < self.top_row)
        {
            self.top_line = cursor_line;
            self.top_row = cursor_row;
            return;
        }

        let mut rows = self.rows_through_cursor(&rows_of, cursor_line, cursor_row);
        while rows > self.height as usize {
            self.top_row += 1;
            if self.top_row >= rows_of(self.top_line) {
                self.top_line += 1;
                self.top_row = 0;
            }
            rows -= 1;
        }
    }

    /// Terminal row of the cursor. Only meaningful after
    /// [`scroll_to_cursor`](Self::scroll_to_cursor).
    pub fn screen_row(
        &self,
        rows_of: impl Fn(usize) -> usize,
        cursor_line: usize,
        cursor_row: usize,
    ) -> u16 {
        let rows = self.rows_through_cursor(&rows_of, cursor_line, cursor_row);
        u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Rows from the window top through the cursor row, inclusive.
    fn rows_through_cursor(
        &self,
        rows_of: &impl Fn(usize) -> usize,
        cursor_line: usize,
        cursor_row: usize,
    ) -> usize {
        let mut rows = 0;
        for idx in self.top_line..cursor_line {
            rows += rows_of(idx);
        }
        rows + cursor_row + 1 - self.top_row
    }
}
