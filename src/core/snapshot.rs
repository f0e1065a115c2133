//! Immutable board snapshots.
//!
//! A `Snapshot` is the full board at one point in a game's history. Moves never
//! mutate a snapshot; [`Snapshot::with_cell`] returns a new one that shares
//! structure with its predecessor through `im::Vector`, so keeping every
//! position of a game around is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Mark};

/// Full board state, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    cells: Vector<Cell>,
}

impl Snapshot {
    /// All-empty board with `cell_count` cells.
    #[must_use]
    pub fn empty(cell_count: usize) -> Self {
        Self {
            cells: std::iter::repeat(Cell::Empty).take(cell_count).collect(),
        }
    }

    /// Build a snapshot from explicit cells.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Mark at `index`, `None` when empty or off the board.
    #[must_use]
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.get(index).and_then(Cell::mark)
    }

    /// Whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// New snapshot with `index` set to `cell`.
    ///
    /// Returns `None` when `index` is off the board; `self` is never modified.
    #[must_use]
    pub fn with_cell(&self, index: usize, cell: Cell) -> Option<Self> {
        if index >= self.cells.len() {
            return None;
        }
        Some(Self {
            cells: self.cells.update(index, cell),
        })
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
