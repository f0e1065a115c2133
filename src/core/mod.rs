//! Core engine types: board geometry, cells, snapshots, configuration,
//! errors, RNG.
//!
//! Everything here is independent of how wins are detected or how history is
//! kept; the `lines`, `rules` and `history` modules build on these types.

pub mod cell;
pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;
pub mod snapshot;

pub use cell::{Cell, Mark};
pub use config::{BoardSizePolicy, GameConfig, LinePolicy, RunScope, DEFAULT_RUN_LENGTH};
pub use error::{ConfigError, HistoryError, MoveError};
pub use geometry::BoardSize;
pub use rng::GameRng;
pub use snapshot::Snapshot;
