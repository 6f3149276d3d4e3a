use std::path::PathBuf;

use crate::editor::EditorBuffer;
use crate::ui::viewport::Viewport;

/// Editing mode. Command-line entry (`:`) is a transient state handled by
/// a bounded loop in the event loop, not a persistent mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The text buffer being edited
    pub buffer: EditorBuffer,
    /// Viewport managing scroll position
    pub viewport: Viewport,
    /// Path the buffer reads from and writes to, if any
    pub file_path: Option<PathBuf>,
    /// Current editing mode
    pub mode: Mode,
    /// Partial `:` command being typed, shown on the status row
    pub command_line: Option<String>,
    /// Transient status message; cleared on the next processed input
    pub status: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    pub fn new(file_path: Option<PathBuf>, buffer: EditorBuffer, size: (u16, u16)) -> Self {
        Self {
            buffer,
            viewport: Viewport::new(size.0, size.1.saturating_sub(1)),
            file_path,
            mode: Mode::Normal,
            command_line: None,
            status: None,
            should_quit: false,
        }
    }

    /// Show a transient status message.
    pub fn show_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Scroll the viewport so the cursor is visible.
    pub fn sync_viewport(&mut self) {
        let Self {
            buffer, viewport, ..
        } = self;
        let width = viewport.width();
        let cursor_row = buffer.cursor_visual_col() / width.max(1) as usize;
        viewport.scroll_to_cursor(
            |idx| Viewport::rows_in_line(width, buffer.visual_line_len(idx)),
            buffer.line_count(),
            buffer.cursor_line_index(),
            cursor_row,
        );
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(None, EditorBuffer::default(), (80, 24))
    }
}
