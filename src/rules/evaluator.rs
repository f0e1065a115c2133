//! Win and draw evaluation.
//!
//! Checks every line of a `LineSet` against a snapshot. A line wins when all
//! of its cells hold the same mark. Lines are checked in set order and the
//! first winning line is reported; two different marks can only both own a
//! line on a board that legal play never produces.

use serde::{Deserialize, Serialize};

use crate::core::{Mark, Snapshot};
use crate::lines::{Line, LineSet};

/// Result of evaluating a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    Ongoing,
    /// A line is fully owned by this mark.
    Winner(Mark),
    /// Board full, no winning line.
    Draw,
}

impl Outcome {
    /// Whether the game is over.
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Winning mark, if any.
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Ongoing"),
            Outcome::Winner(mark) => write!(f, "Winner: {}", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Mark owning every cell of `line`, if any.
fn line_owner(snapshot: &Snapshot, line: &Line) -> Option<Mark> {
    let (&first, rest) = line.cells().split_first()?;
    let mark = snapshot.mark_at(first)?;
    rest.iter()
        .all(|&index| snapshot.mark_at(index) == Some(mark))
        .then_some(mark)
}

/// First line fully owned by one mark.
///
/// `None` when the snapshot was not built for the line set's board.
#[must_use]
pub fn winning_line<'a>(snapshot: &Snapshot, lines: &'a LineSet) -> Option<(Mark, &'a Line)> {
    if snapshot.len() != lines.size().cell_count() {
        return None;
    }
    lines
        .iter()
        .find_map(|line| line_owner(snapshot, line).map(|mark| (mark, line)))
}

/// Evaluate a position.
///
/// `O(|lines| * run length)`. A snapshot whose length does not match the
/// line set's board is never finished and evaluates to `Ongoing`.
#[must_use]
pub fn evaluate(snapshot: &Snapshot, lines: &LineSet) -> Outcome {
    if snapshot.len() != lines.size().cell_count() {
        tracing::debug!(cells = snapshot.len(), size = %lines.size(), "snapshot does not fit line set");
        return Outcome::Ongoing;
    }
    if let Some((mark, _)) = winning_line(snapshot, lines) {
        return Outcome::Winner(mark);
    }
    if snapshot.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSize, Cell, LinePolicy};

    fn board(cells: &str) -> Snapshot {
        Snapshot::from_cells(cells.chars().filter(|c| !c.is_whitespace()).map(|c| match c {
            'X' => Cell::X,
            'O' => Cell::O,
            _ => Cell::Empty,
        }))
    }

    fn classic() -> LineSet {
        LineSet::generate(BoardSize::square(3), LinePolicy::default()).unwrap()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Snapshot::empty(9), &classic()), Outcome::Ongoing);
    }

    #[test]
    fn test_mismatched_snapshot_is_ongoing() {
        let lines = classic();

        // Full 2x2 board against 3x3 lines.
        let short = board("XX XX");
        assert_eq!(winning_line(&short, &lines), None);
        assert_eq!(evaluate(&short, &lines), Outcome::Ongoing);

        // Winning top row padded out to 4x4.
        let long = board("XXX. OO.. .... ....");
        assert_eq!(winning_line(&long, &lines), None);
        assert_eq!(evaluate(&long, &lines), Outcome::Ongoing);
    }

    #[test]
    fn test_row_win() {
        let snap = board("XXX OO. ...");
        assert_eq!(evaluate(&snap, &classic()), Outcome::Winner(Mark::X));

        let lines = classic();
        let (_, line) = winning_line(&snap, &lines).unwrap();
        assert_eq!(line.cells(), [0, 1, 2]);
    }

    #[test]
    fn test_column_win_for_o() {
        let snap = board("XO. XO. .OX");
        assert_eq!(evaluate(&snap, &classic()), Outcome::Winner(Mark::O));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let snap = board("OOX .X. X..");
        assert_eq!(evaluate(&snap, &classic()), Outcome::Winner(Mark::X));
    }

    #[test]
    fn test_draw() {
        let snap = board("XOX OOX XXO");
        assert_eq!(evaluate(&snap, &classic()), Outcome::Draw);

        let snap = board("XOX OOX OXO");
        assert_eq!(evaluate(&snap, &classic()), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let snap = board("XXX OOX OXO");
        assert_eq!(evaluate(&snap, &classic()), Outcome::Winner(Mark::X));
    }

    #[test]
    fn test_partial_line_is_not_a_win() {
        let snap = board("XX. ... ...");
        assert_eq!(evaluate(&snap, &classic()), Outcome::Ongoing);
    }

    #[test]
    fn test_no_lines_full_board_is_draw() {
        let lines = LineSet::generate(BoardSize::new(2, 2), LinePolicy::full(3)).unwrap();
        assert!(lines.is_empty());
        assert_eq!(evaluate(&board("XX XX"), &lines), Outcome::Draw);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::Ongoing.is_finished());
        assert!(Outcome::Draw.is_finished());
        assert_eq!(Outcome::Winner(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Winner(Mark::X).to_string(), "Winner: X");
    }
}
