// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. store::LineStore)
    clippy::module_name_repetitions
)]

//! # Minvi
//!
//! A minimal modal terminal text editor.
//!
//! Minvi edits plain text files with:
//! - Byte-accurate edits on UTF-8 text
//! - Tab-aware visual columns and sticky-column vertical movement
//! - Soft-wrapped viewport that follows the cursor
//! - A small `:` command set (`q`, `q!`, `w`, `w name`, `d`)
//!
//! ## Architecture
//!
//! Minvi uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Line storage, cursor geometry, and edit operations
//! - [`ui`]: Terminal UI components
//! - [`config`]: Config file and flag parsing

pub mod app;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::EditorBuffer;
    pub use crate::ui::viewport::Viewport;
}
