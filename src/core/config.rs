//! Game configuration types.
//!
//! Hosts configure a session at startup by providing:
//! - `BoardSizePolicy`: a fixed board or a random square size per game
//! - `LinePolicy`: the minimum run length that counts as a win, and whether
//!   wins need a full line or any window of that length
//! - `GameConfig`: combines the above with the RNG seed
//!
//! The engine never hardcodes a board size or a run length.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::geometry::BoardSize;
use super::rng::GameRng;

/// Default minimum run length, classic three-in-a-row.
pub const DEFAULT_RUN_LENGTH: usize = 3;

/// Which stretches of a line count as a win.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunScope {
    /// Every cell of a maximal row, column, or diagonal must match.
    /// Diagonals shorter than the minimum run length are dropped.
    #[default]
    Full,
    /// Any contiguous stretch of exactly the minimum run length wins
    /// (k-in-a-row, as in gomoku).
    Window,
}

/// Win-line policy for the line generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinePolicy {
    /// Lines shorter than this are never win conditions (>= 1).
    pub minimum_run_length: usize,

    /// Full-line or windowed wins.
    pub scope: RunScope,
}

impl Default for LinePolicy {
    fn default() -> Self {
        Self {
            minimum_run_length: DEFAULT_RUN_LENGTH,
            scope: RunScope::Full,
        }
    }
}

impl LinePolicy {
    /// Full-line policy with the given minimum run length.
    #[must_use]
    pub const fn full(minimum_run_length: usize) -> Self {
        Self {
            minimum_run_length,
            scope: RunScope::Full,
        }
    }

    /// Windowed (k-in-a-row) policy.
    #[must_use]
    pub const fn window(minimum_run_length: usize) -> Self {
        Self {
            minimum_run_length,
            scope: RunScope::Window,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_run_length == 0 {
            return Err(ConfigError::InvalidRunLength(self.minimum_run_length));
        }
        Ok(())
    }
}

/// How the board size is chosen when a game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardSizePolicy {
    /// Always the same board.
    Fixed(BoardSize),
    /// Square board with a side drawn uniformly from `min..=max`.
    RandomSquare { min: usize, max: usize },
}

impl Default for BoardSizePolicy {
    fn default() -> Self {
        BoardSizePolicy::RandomSquare { min: 3, max: 6 }
    }
}

impl BoardSizePolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            // BoardSize is checked on construction and on deserialization.
            BoardSizePolicy::Fixed(_) => Ok(()),
            BoardSizePolicy::RandomSquare { min, max } => {
                if min == 0 || min > max {
                    return Err(ConfigError::InvalidSizeRange { min, max });
                }
                Ok(())
            }
        }
    }

    /// Pick the board for a new game.
    ///
    /// Call only on a validated policy.
    pub fn choose(&self, rng: &mut GameRng) -> BoardSize {
        match *self {
            BoardSizePolicy::Fixed(size) => size,
            BoardSizePolicy::RandomSquare { min, max } => {
                BoardSize::square(rng.gen_range_inclusive(min..=max))
            }
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size selection.
    pub board: BoardSizePolicy,

    /// Win-line policy.
    pub lines: LinePolicy,

    /// Seed for board size selection.
    pub seed: u64,
}

impl GameConfig {
    /// Fixed board with default line policy.
    #[must_use]
    pub fn fixed(size: BoardSize) -> Self {
        Self::default().with_board(BoardSizePolicy::Fixed(size))
    }

    /// Set the board size policy.
    #[must_use]
    pub fn with_board(mut self, board: BoardSizePolicy) -> Self {
        self.board = board;
        self
    }

    /// Set the line policy.
    #[must_use]
    pub fn with_lines(mut self, lines: LinePolicy) -> Self {
        self.lines = lines;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        self.lines.validate()?;
        Ok(())
    }
}
