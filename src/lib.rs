//! # rust-ttt
//!
//! Generalized tic-tac-toe on an N×M board: two players alternate marks, a
//! line engine decides wins and draws, and a move history supports jumping
//! back to any earlier position.
//!
//! ## Design Principles
//!
//! 1. **Any Rectangle**: No hardcoded 3×3. Win lines are enumerated for any
//!    `BoardSize` by walking rows, columns and both diagonal families.
//!
//! 2. **Explicit Policy**: The minimum run length and whether a win needs a
//!    full line or any window of that length are configuration
//!    (`LinePolicy`), never a convention buried in the evaluator.
//!
//! 3. **Immutable Positions**: Every move produces a new `Snapshot`; history is
//!    a truncate-then-append sequence of them.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Snapshots and history use `im-rs`, so a
//!   move shares structure with the position before it.
//!
//! - **Owned Sessions**: A `MoveHistory` is an ordinary value owned by its
//!   caller; there is no global game state.
//!
//! ## Modules
//!
//! - `core`: Board geometry, cells, snapshots, configuration, errors, RNG
//! - `lines`: Winning-line generation and caching
//! - `rules`: Win/draw evaluation
//! - `history`: Move history with time travel
//! - `session`: Presenter-facing controller
//!
//! ## Example
//!
//! ```
//! use rust_ttt::{BoardSize, LinePolicy, Mark, MoveHistory, Outcome};
//!
//! let mut game = MoveHistory::new_game(BoardSize::square(3), LinePolicy::default()).unwrap();
//! for cell in [0, 4, 1, 3, 2] {
//!     game.play(cell).unwrap();
//! }
//! assert_eq!(game.current().outcome, Outcome::Winner(Mark::X));
//!
//! // Occupied cells and finished games reject moves without changing state.
//! assert!(game.play(8).is_err());
//! assert_eq!(game.len(), 6);
//!
//! // Time travel, then branch.
//! game.jump_to(2).unwrap();
//! game.play(8).unwrap();
//! assert_eq!(game.len(), 4);
//! ```

pub mod core;
pub mod history;
pub mod lines;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, BoardSizePolicy, Cell, ConfigError, GameConfig, GameRng, HistoryError,
    LinePolicy, Mark, MoveError, RunScope, Snapshot,
};

pub use crate::lines::{Direction, Line, LineSet, LineSetCache};

pub use crate::rules::{evaluate, winning_line, Outcome};

pub use crate::history::{CurrentPosition, MoveHistory};

pub use crate::session::{GameController, MoveEntry};
