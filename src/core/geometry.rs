//! Board dimensions and the row-major index mapping.
//!
//! Cells are stored row-major: `index = row * columns + col`.
//! Every other module goes through `BoardSize` for this mapping, so the
//! arithmetic lives in exactly one place.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Dimensions of a rectangular board.
///
/// Both dimensions are at least 1. Fixed for the lifetime of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardSize")]
pub struct BoardSize {
    rows: usize,
    columns: usize,
}

impl BoardSize {
    /// Create a board size.
    ///
    /// Panics if either dimension is zero. Use [`BoardSize::try_new`] for
    /// untrusted input.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0, "Board must have at least 1 row");
        assert!(columns > 0, "Board must have at least 1 column");
        Self { rows, columns }
    }

    /// Create a board size, rejecting zero dimensions.
    pub fn try_new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::InvalidBoardSize { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Square board of `side × side`.
    #[must_use]
    pub fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.columns
    }

    /// Whether `(row, col)` lies on the board.
    #[must_use]
    pub const fn in_bounds(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Linear index of `(row, col)`.
    ///
    /// Only meaningful for in-bounds coordinates.
    #[must_use]
    pub const fn to_index(self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// Inverse of [`BoardSize::to_index`]. `None` when `index` is off the board.
    #[must_use]
    pub const fn to_row_col(self, index: usize) -> Option<(usize, usize)> {
        if index >= self.cell_count() {
            return None;
        }
        Some((index / self.columns, index % self.columns))
    }
}

/// Unchecked wire form; deserialization goes through [`BoardSize::try_new`].
#[derive(Deserialize)]
struct RawBoardSize {
    rows: usize,
    columns: usize,
}

impl TryFrom<RawBoardSize> for BoardSize {
    type Error = ConfigError;

    fn try_from(raw: RawBoardSize) -> Result<Self, Self::Error> {
        Self::try_new(raw.rows, raw.columns)
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_index_row_major() {
        let size = BoardSize::new(3, 4);
        assert_eq!(size.to_index(0, 0), 0);
        assert_eq!(size.to_index(0, 3), 3);
        assert_eq!(size.to_index(1, 0), 4);
        assert_eq!(size.to_index(2, 3), 11);
        assert_eq!(size.cell_count(), 12);
    }

    #[test]
    fn test_to_row_col_inverse() {
        let size = BoardSize::new(4, 5);
        for index in 0..size.cell_count() {
            let (row, col) = size.to_row_col(index).unwrap();
            assert!(size.in_bounds(row, col));
            assert_eq!(size.to_index(row, col), index);
        }
        assert_eq!(size.to_row_col(20), None);
    }

    #[test]
    fn test_in_bounds() {
        let size = BoardSize::new(2, 3);
        assert!(size.in_bounds(1, 2));
        assert!(!size.in_bounds(2, 0));
        assert!(!size.in_bounds(0, 3));
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert!(BoardSize::try_new(0, 3).is_err());
        assert!(BoardSize::try_new(3, 0).is_err());
        assert_eq!(BoardSize::try_new(1, 1).unwrap(), BoardSize::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "Board must have at least 1 row")]
    fn test_new_zero_rows() {
        let _ = BoardSize::new(0, 3);
    }

    #[test]
    fn test_deserialize_rejects_zero_dimension() {
        let err = serde_json::from_str::<BoardSize>(r#"{"rows":3,"columns":0}"#).unwrap_err();
        assert!(err.to_string().contains("board size 3x0 is invalid"));

        let size: BoardSize = serde_json::from_str(r#"{"rows":2,"columns":5}"#).unwrap();
        assert_eq!(size, BoardSize::new(2, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BoardSize::new(3, 5)), "3x5");
    }
}
