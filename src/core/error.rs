//! Error types.
//!
//! Every failure in the engine is a rejected request: the caller asked for
//! something the rules forbid, nothing changed, and the game can continue.

use crate::rules::Outcome;

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {cell} is off the board ({cell_count} cells)")]
    OutOfRange { cell: usize, cell_count: usize },

    #[error("cell {cell} is already occupied")]
    Occupied { cell: usize },

    #[error("game is already over: {0}")]
    GameOver(Outcome),
}

/// Why a history jump was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("history index {index} out of range (length {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {rows}x{columns} is invalid: both dimensions must be >= 1")]
    InvalidBoardSize { rows: usize, columns: usize },

    #[error("minimum run length must be >= 1, got {0}")]
    InvalidRunLength(usize),

    #[error("random board size range {min}..={max} is invalid")]
    InvalidSizeRange { min: usize, max: usize },
}
