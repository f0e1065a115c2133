//! Winning-line generation for arbitrary rectangular boards.
//!
//! ## Algorithm
//!
//! Every line is produced by the same directional walk: start on a boundary
//! cell, step in one direction until falling off the board, and collect the
//! indices visited.
//!
//! | Direction      | Step       | Start cells                        |
//! |----------------|------------|------------------------------------|
//! | `Row`          | `(0, +1)`  | left column                        |
//! | `Column`       | `(+1, 0)`  | top row                            |
//! | `Diagonal` ↘   | `(+1, +1)` | left column (bottom-up), top row   |
//! | `AntiDiagonal` ↙ | `(+1, -1)` | top row, right column (top-down) |
//!
//! Each diagonal family therefore yields `rows + columns - 1` raw lines,
//! ordered left to right. Walks shorter than the minimum run length are
//! dropped. With [`RunScope::Window`] each surviving walk is further split
//! into every contiguous window of exactly the minimum run length.
//!
//! No closed-form index arithmetic is used for diagonals; the walk is correct
//! for non-square boards by construction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardSize, ConfigError, LinePolicy, RunScope};

/// Cell indices of one line. Inline for boards up to 8 cells across.
pub type LineCells = SmallVec<[usize; 8]>;

/// Direction a line was walked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Top-right to bottom-left (↙).
    AntiDiagonal,
}

impl Direction {
    /// All directions, in line-set order.
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Next coordinate along this direction. `None` when the column would go
    /// negative; the caller checks the other bounds.
    fn step(self, row: usize, col: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Row => Some((row, col + 1)),
            Direction::Column => Some((row + 1, col)),
            Direction::Diagonal => Some((row + 1, col + 1)),
            Direction::AntiDiagonal => Some((row + 1, col.checked_sub(1)?)),
        }
    }

    /// Boundary cells every walk in this direction starts from, left to right.
    fn starts(self, size: BoardSize) -> Vec<(usize, usize)> {
        let rows = size.rows();
        let cols = size.columns();
        match self {
            Direction::Row => (0..rows).map(|r| (r, 0)).collect(),
            Direction::Column => (0..cols).map(|c| (0, c)).collect(),
            Direction::Diagonal => (1..rows)
                .rev()
                .map(|r| (r, 0))
                .chain((0..cols).map(|c| (0, c)))
                .collect(),
            Direction::AntiDiagonal => (0..cols)
                .map(|c| (0, c))
                .chain((1..rows).map(|r| (r, cols - 1)))
                .collect(),
        }
    }

    /// Walk from `start` until leaving the board.
    fn walk(self, size: BoardSize, start: (usize, usize)) -> LineCells {
        let mut cells = LineCells::new();
        let mut pos = Some(start);

        while let Some((row, col)) = pos {
            if !size.in_bounds(row, col) {
                break;
            }
            cells.push(size.to_index(row, col));
            pos = self.step(row, col);
        }

        cells
    }
}

/// One geometric win condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    direction: Direction,
    cells: LineCells,
}

impl Line {
    /// Create a line from explicit cells.
    #[must_use]
    pub fn new(direction: Direction, cells: impl IntoIterator<Item = usize>) -> Self {
        Self {
            direction,
            cells: cells.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell indices in walk order.
    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Run length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Every win condition for one board size and line policy.
///
/// Depends only on its inputs, so it is built once and shared (see
/// [`LineSetCache`](super::LineSetCache)).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    size: BoardSize,
    policy: LinePolicy,
    lines: Vec<Line>,
}

impl LineSet {
    /// Generate all lines for `size` under `policy`.
    ///
    /// Order: rows, columns, ↘ diagonals, ↙ diagonals, each family left to
    /// right (top to bottom for rows).
    ///
    /// Lines are distinct within one direction. With a run length of 1 the
    /// same single cell is also a line of every other direction, so the set
    /// as a whole may repeat a cell list under different directions.
    pub fn generate(size: BoardSize, policy: LinePolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        let k = policy.minimum_run_length;

        let mut lines = Vec::new();
        for direction in Direction::ALL {
            for start in direction.starts(size) {
                let walk = direction.walk(size, start);
                if walk.len() < k {
                    continue;
                }
                match policy.scope {
                    RunScope::Full => lines.push(Line {
                        direction,
                        cells: walk,
                    }),
                    RunScope::Window => lines.extend(
                        walk.windows(k)
                            .map(|window| Line::new(direction, window.iter().copied())),
                    ),
                }
            }
        }

        tracing::trace!(%size, k, scope = ?policy.scope, lines = lines.len(), "generated line set");

        Ok(Self {
            size,
            policy,
            lines,
        })
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[must_use]
    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines walked in `direction`.
    #[must_use]
    pub fn count(&self, direction: Direction) -> usize {
        self.lines.iter().filter(|l| l.direction == direction).count()
    }

    /// Lines walked in `direction`, in set order.
    pub fn in_direction(&self, direction: Direction) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |l| l.direction == direction)
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_of(set: &LineSet, direction: Direction) -> Vec<Vec<usize>> {
        set.in_direction(direction).map(|l| l.cells().to_vec()).collect()
    }

    #[test]
    fn test_classic_three_by_three() {
        let set = LineSet::generate(BoardSize::square(3), LinePolicy::default()).unwrap();

        assert_eq!(set.len(), 8);
        assert_eq!(
            cells_of(&set, Direction::Row),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]
        );
        assert_eq!(
            cells_of(&set, Direction::Column),
            vec![vec![0, 3, 6], vec![1, 4, 7], vec![2, 5, 8]]
        );
        assert_eq!(cells_of(&set, Direction::Diagonal), vec![vec![0, 4, 8]]);
        assert_eq!(cells_of(&set, Direction::AntiDiagonal), vec![vec![2, 4, 6]]);
    }

    #[test]
    fn test_order_is_rows_columns_diagonals() {
        let set = LineSet::generate(BoardSize::square(3), LinePolicy::default()).unwrap();
        let directions: Vec<_> = set.iter().map(Line::direction).collect();
        assert_eq!(
            directions,
            vec![
                Direction::Row,
                Direction::Row,
                Direction::Row,
                Direction::Column,
                Direction::Column,
                Direction::Column,
                Direction::Diagonal,
                Direction::AntiDiagonal,
            ]
        );
    }

    #[test]
    fn test_four_by_four_diagonals() {
        let set = LineSet::generate(BoardSize::square(4), LinePolicy::full(3)).unwrap();

        assert_eq!(
            cells_of(&set, Direction::Diagonal),
            vec![vec![4, 9, 14], vec![0, 5, 10, 15], vec![1, 6, 11]]
        );
        assert_eq!(
            cells_of(&set, Direction::AntiDiagonal),
            vec![vec![2, 5, 8], vec![3, 6, 9, 12], vec![7, 10, 13]]
        );
        assert_eq!(set.len(), 4 + 4 + 3 + 3);
    }

    #[test]
    fn test_rectangular_board_diagonals() {
        // 3 rows, 5 columns:
        //  0  1  2  3  4
        //  5  6  7  8  9
        // 10 11 12 13 14
        let set = LineSet::generate(BoardSize::new(3, 5), LinePolicy::full(3)).unwrap();

        assert_eq!(
            cells_of(&set, Direction::Diagonal),
            vec![vec![0, 6, 12], vec![1, 7, 13], vec![2, 8, 14]]
        );
        assert_eq!(
            cells_of(&set, Direction::AntiDiagonal),
            vec![vec![2, 6, 10], vec![3, 7, 11], vec![4, 8, 12]]
        );
    }

    #[test]
    fn test_tall_board_diagonals() {
        // 4 rows, 2 columns: no diagonal reaches length 3.
        let set = LineSet::generate(BoardSize::new(4, 2), LinePolicy::full(3)).unwrap();
        assert_eq!(set.count(Direction::Row), 0);
        assert_eq!(set.count(Direction::Column), 2);
        assert_eq!(set.count(Direction::Diagonal), 0);
        assert_eq!(set.count(Direction::AntiDiagonal), 0);
    }

    #[test]
    fn test_raw_diagonal_count_with_run_length_one() {
        let size = BoardSize::new(3, 5);
        let set = LineSet::generate(size, LinePolicy::full(1)).unwrap();
        assert_eq!(set.count(Direction::Diagonal), size.rows() + size.columns() - 1);
        assert_eq!(set.count(Direction::AntiDiagonal), size.rows() + size.columns() - 1);
    }

    #[test]
    fn test_window_scope_splits_runs() {
        let set = LineSet::generate(BoardSize::square(4), LinePolicy::window(3)).unwrap();

        assert_eq!(set.count(Direction::Row), 8);
        assert_eq!(set.count(Direction::Column), 8);
        assert_eq!(
            cells_of(&set, Direction::Diagonal),
            vec![vec![4, 9, 14], vec![0, 5, 10], vec![5, 10, 15], vec![1, 6, 11]]
        );
        assert!(set.iter().all(|l| l.len() == 3));
    }

    #[test]
    fn test_window_scope_connect_four_board() {
        let set = LineSet::generate(BoardSize::new(6, 7), LinePolicy::window(4)).unwrap();
        assert_eq!(set.len(), 69);
    }

    #[test]
    fn test_run_length_longer_than_board() {
        let set = LineSet::generate(BoardSize::square(3), LinePolicy::full(4)).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_zero_run_length_rejected() {
        let err = LineSet::generate(BoardSize::square(3), LinePolicy::window(0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRunLength(0));
    }

    #[test]
    fn test_single_cell_board() {
        let set = LineSet::generate(BoardSize::new(1, 1), LinePolicy::full(1)).unwrap();
        // Row, column and both diagonals each see the single cell.
        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|l| l.cells() == [0]));
    }

    #[test]
    fn test_lines_distinct_within_direction() {
        for (size, policy) in [
            (BoardSize::new(1, 3), LinePolicy::full(1)),
            (BoardSize::new(3, 1), LinePolicy::window(1)),
            (BoardSize::new(4, 4), LinePolicy::window(2)),
            (BoardSize::new(3, 5), LinePolicy::full(1)),
        ] {
            let set = LineSet::generate(size, policy).unwrap();
            for direction in Direction::ALL {
                let cells: Vec<_> = set.in_direction(direction).map(|l| l.cells().to_vec()).collect();
                let mut deduped = cells.clone();
                deduped.sort();
                deduped.dedup();
                assert_eq!(deduped.len(), cells.len(), "{size} {direction:?}");
            }
        }

        // Single-cell lines repeat across directions.
        let set = LineSet::generate(BoardSize::new(1, 3), LinePolicy::full(1)).unwrap();
        assert_eq!(set.count(Direction::Row), 1);
        assert_eq!(set.count(Direction::Column), 3);
        assert!(set.in_direction(Direction::Column).any(|l| l.cells() == [0]));
        assert!(set.in_direction(Direction::Diagonal).any(|l| l.cells() == [0]));
    }

    #[test]
    fn test_line_contains() {
        let line = Line::new(Direction::Diagonal, [0, 4, 8]);
        assert!(line.contains(4));
        assert!(!line.contains(5));
        assert_eq!(line.len(), 3);
        assert!(!line.is_empty());
    }
}
