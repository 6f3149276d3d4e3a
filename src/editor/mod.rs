//! The editing core: line storage, positions, edit operations, navigation.
//!
//! The buffer is an arena of line records linked by index, a cursor
//! [`Position`] that is always on a UTF-8 rune boundary, and edit/move
//! operations that return the position the cursor should occupy next.

mod buffer;
pub mod edit;
pub mod nav;
pub mod position;
pub mod store;

pub use buffer::{DEFAULT_TAB_WIDTH, EditorBuffer};
pub use nav::{Direction, EdgePolicy};
pub use position::Position;
pub use store::{GROW_CHUNK, GrowError, LineId, LineStore};
