//! Terminal UI components.
//!
//! - [`viewport`]: visible window and cursor-following scroll
//! - [`render`]: buffer rows, tab expansion, cursor cell
//! - status bar rendering for the bottom terminal row

pub mod viewport;

mod render;
mod status;

pub use render::render;
