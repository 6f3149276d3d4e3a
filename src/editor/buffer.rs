//! The editor buffer: line store, cursor, dirty tracking, and file I/O.
//!
//! Ties the store, position model, edit operations and navigation together
//! behind the API the application layer uses.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::edit;
use super::nav::{self, Direction, EdgePolicy};
use super::position::{self, Position};
use super::store::{GrowError, LineStore};

/// Default tab stop width, matching the historical curses default.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// A text buffer with a cursor.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    store: LineStore,
    cursor: Position,
    sticky_col: usize,
    dirty: bool,
    tab_width: usize,
    edge_policy: EdgePolicy,
}

impl EditorBuffer {
    /// Create an empty single-line buffer.
    pub fn new(tab_width: usize, edge_policy: EdgePolicy) -> Self {
        let store = LineStore::new();
        let cursor = Position::new(store.first(), 0);
        Self {
            store,
            cursor,
            sticky_col: 0,
            dirty: false,
            tab_width,
            edge_policy,
        }
    }

    /// Build a buffer from file contents.
    ///
    /// Content splits on `\n`; a trailing newline does not produce a
    /// spurious empty final line, while a final unterminated line loads
    /// as-is.
    pub fn from_text(
        text: &str,
        tab_width: usize,
        edge_policy: EdgePolicy,
    ) -> Result<Self, GrowError> {
        let mut buffer = Self::new(tab_width, edge_policy);
        let end = edit::insert_text(&mut buffer.store, buffer.cursor, text)?;
        if text.ends_with('\n') && buffer.store.line_count() > 1 {
            edit::delete_line(&mut buffer.store, end);
        }
        buffer.cursor = Position::new(buffer.store.first(), 0);
        Ok(buffer)
    }

    /// Write the buffer to `path`: every line followed by exactly one `\n`,
    /// the last included. Marks the buffer clean on success.
    pub fn save(&mut self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for id in self.store.iter() {
            out.write_all(self.store.text(id).as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        self.dirty = false;
        Ok(())
    }

    // --- Queries ---

    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// Content of the line at a zero-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.store.line_at_index(index).map(|id| self.store.text(id))
    }

    /// Iterate over line contents from top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.store.iter().map(|id| self.store.text(id))
    }

    /// Zero-based index of the cursor line.
    pub fn cursor_line_index(&self) -> usize {
        self.store.index_of(self.cursor.line)
    }

    /// Visual column of the cursor, tab expansion applied.
    pub fn cursor_visual_col(&self) -> usize {
        position::visual_col(
            self.store.text(self.cursor.line),
            self.cursor.offset,
            self.tab_width,
        )
    }

    /// Visual length of the line at `index`.
    pub fn visual_line_len(&self, index: usize) -> usize {
        self.line(index)
            .map_or(0, |text| position::visual_len(text, self.tab_width))
    }

    /// Buffer contents in file form: every line newline-terminated.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    // --- Edits ---

    /// Insert one rune at the cursor.
    pub fn insert_char(&mut self, ch: char) -> Result<(), GrowError> {
        let mut utf8 = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut utf8))
    }

    /// Insert text at the cursor, splitting lines at embedded newlines.
    pub fn insert_str(&mut self, text: &str) -> Result<(), GrowError> {
        if text.is_empty() {
            return Ok(());
        }
        self.cursor = edit::insert_text(&mut self.store, self.cursor, text)?;
        self.sticky_col = 0;
        self.dirty = true;
        Ok(())
    }

    /// Delete the rune before the cursor, merging lines at offset 0.
    pub fn backspace(&mut self) -> Result<(), GrowError> {
        let before = self.cursor;
        let count_before = self.store.line_count();
        self.cursor = edit::backspace(&mut self.store, self.cursor)?;
        self.sticky_col = 0;
        if self.cursor != before || self.store.line_count() != count_before {
            self.dirty = true;
        }
        Ok(())
    }

    /// Delete the cursor line (`:d`).
    pub fn delete_line(&mut self) {
        let count_before = self.store.line_count();
        self.cursor = edit::delete_line(&mut self.store, self.cursor);
        self.sticky_col = 0;
        if self.store.line_count() != count_before {
            self.dirty = true;
        }
    }

    // --- Movement ---

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                self.cursor = nav::move_left(&self.store, self.cursor, self.edge_policy);
                self.sticky_col = 0;
            }
            Direction::Right => {
                self.cursor = nav::move_right(&self.store, self.cursor);
                self.sticky_col = 0;
            }
            Direction::Up => {
                let (cursor, sticky) =
                    nav::move_up(&self.store, self.cursor, self.sticky_col, self.tab_width);
                self.cursor = cursor;
                self.sticky_col = sticky;
            }
            Direction::Down => {
                let (cursor, sticky) =
                    nav::move_down(&self.store, self.cursor, self.sticky_col, self.tab_width);
                self.cursor = cursor;
                self.sticky_col = sticky;
            }
        }
    }

    /// Step one rune left without ever wrapping, used when leaving insert
    /// mode so the cursor lands on the last inserted rune.
    pub fn step_left(&mut self) {
        self.cursor = nav::move_left(&self.store, self.cursor, EdgePolicy::Stop);
        self.sticky_col = 0;
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_WIDTH, EdgePolicy::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(text: &str) -> EditorBuffer {
        EditorBuffer::from_text(text, DEFAULT_TAB_WIDTH, EdgePolicy::Stop).unwrap()
    }

    #[test]
    fn test_empty_buffer_has_one_line() {
        let b = EditorBuffer::default();
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line(0), Some(""));
    }

    #[test]
    fn test_from_text_splits_lines() {
        let b = buf("hello\nworld");
        assert_eq!(b.line_count(), 2);
        assert_eq!(b.line(0), Some("hello"));
        assert_eq!(b.line(1), Some("world"));
    }

    #[test]
    fn test_from_text_trailing_newline_trimmed() {
        let b = buf("hello\nworld\n");
        assert_eq!(b.line_count(), 2);
        assert_eq!(b.line(1), Some("world"));
    }

    #[test]
    fn test_from_text_unterminated_final_line_kept() {
        let b = buf("hello\npartial");
        assert_eq!(b.line_count(), 2);
        assert_eq!(b.line(1), Some("partial"));
    }

    #[test]
    fn test_from_text_lone_newline_is_single_empty_line() {
        let b = buf("\n");
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line(0), Some(""));
    }

    #[test]
    fn test_cursor_starts_at_origin() {
        let b = buf("hello\nworld");
        assert_eq!(b.cursor_line_index(), 0);
        assert_eq!(b.cursor().offset, 0);
    }

    #[test]
    fn test_text_is_newline_terminated() {
        let b = buf("a\nb");
        assert_eq!(b.text(), "a\nb\n");
    }

    #[test]
    fn test_insert_marks_dirty() {
        let mut b = buf("hello");
        assert!(!b.is_dirty());
        b.insert_char('!').unwrap();
        assert!(b.is_dirty());
    }

    #[test]
    fn test_insert_empty_does_not_mark_dirty() {
        let mut b = buf("hello");
        b.insert_str("").unwrap();
        assert!(!b.is_dirty());
    }

    #[test]
    fn test_noop_backspace_stays_clean() {
        let mut b = buf("hello");
        b.backspace().unwrap();
        assert!(!b.is_dirty());
        assert_eq!(b.line(0), Some("hello"));
    }

    #[test]
    fn test_noop_delete_line_stays_clean() {
        let mut b = buf("hello");
        b.delete_line();
        assert!(!b.is_dirty());
        assert_eq!(b.line_count(), 1);
    }

    #[test]
    fn test_typing_sequence() {
        let mut b = EditorBuffer::default();
        for ch in "hel".chars() {
            b.insert_char(ch).unwrap();
        }
        b.backspace().unwrap();
        b.insert_char('l').unwrap();
        b.insert_char('p').unwrap();
        assert_eq!(b.line(0), Some("help"));
        assert_eq!(b.cursor().offset, 4);
    }

    #[test]
    fn test_insert_newline_moves_cursor_to_new_line() {
        let mut b = buf("hello");
        b.move_cursor(Direction::Right);
        b.move_cursor(Direction::Right);
        b.insert_str("\n").unwrap();
        assert_eq!(b.line(0), Some("he"));
        assert_eq!(b.line(1), Some("llo"));
        assert_eq!(b.cursor_line_index(), 1);
        assert_eq!(b.cursor().offset, 0);
    }

    #[test]
    fn test_sticky_column_resets_on_horizontal_move() {
        let mut b = buf("hello\nhi\nworld");
        for _ in 0..4 {
            b.move_cursor(Direction::Right);
        }
        b.move_cursor(Direction::Down); // "hi" clamps to 2
        assert_eq!(b.cursor().offset, 2);
        b.move_cursor(Direction::Left); // forget the remembered column
        b.move_cursor(Direction::Down);
        assert_eq!(b.cursor().offset, 1);
    }

    #[test]
    fn test_sticky_column_resets_on_edit() {
        let mut b = buf("hello\nhi\nworld");
        for _ in 0..4 {
            b.move_cursor(Direction::Right);
        }
        b.move_cursor(Direction::Down);
        b.insert_char('x').unwrap(); // "hix", cursor offset 3
        b.move_cursor(Direction::Down);
        assert_eq!(b.cursor().offset, 3);
    }

    #[test]
    fn test_cursor_visual_col_with_tab() {
        let mut b = buf("\tx");
        b.move_cursor(Direction::Right);
        assert_eq!(b.cursor_visual_col(), 8);
    }

    #[test]
    fn test_step_left_never_wraps() {
        let mut b = EditorBuffer::from_text("ab\ncd", DEFAULT_TAB_WIDTH, EdgePolicy::WrapPrevious)
            .unwrap();
        b.move_cursor(Direction::Down);
        b.step_left();
        assert_eq!(b.cursor_line_index(), 1);
        assert_eq!(b.cursor().offset, 0);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut b = buf("alpha\nbeta\ngamma");
        b.insert_char('x').unwrap();
        b.save(&path).unwrap();
        assert!(!b.is_dirty());

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "xalpha\nbeta\ngamma\n");
        let reloaded = buf(&raw);
        assert_eq!(reloaded.line_count(), 3);
        assert_eq!(
            reloaded.lines().collect::<Vec<_>>(),
            vec!["xalpha", "beta", "gamma"]
        );
    }
}
