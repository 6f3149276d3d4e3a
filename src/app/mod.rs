//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Mode, Model};
pub use update::{Message, parse_command, update};

use std::path::PathBuf;

use crate::editor::DEFAULT_TAB_WIDTH;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    tab_width: usize,
    wrap_left: bool,
}

impl App {
    /// Create a new application, optionally opening the given file.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            tab_width: DEFAULT_TAB_WIDTH,
            wrap_left: false,
        }
    }

    /// Set the tab stop width used for visual columns.
    pub const fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    /// Let left movement at column zero wrap to the end of the previous line.
    pub const fn with_wrap_left(mut self, enabled: bool) -> Self {
        self.wrap_left = enabled;
        self
    }
}
