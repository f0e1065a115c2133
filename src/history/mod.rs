//! Move history with undo/redo by snapshot index.

mod move_history;

pub use move_history::{CurrentPosition, MoveHistory};
