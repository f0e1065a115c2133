//! Linear move history with time travel.
//!
//! ## Model
//!
//! A `MoveHistory` is an ordered sequence of snapshots plus a pointer to the
//! position being shown. Index 0 is always the empty board.
//!
//! - `play` truncates every snapshot after the pointer, appends the new
//!   position and moves the pointer onto it (a new move discards the redo
//!   branch).
//! - `jump_to` only moves the pointer.
//!
//! Whose turn it is follows from the pointer: even index → X, odd → O.
//!
//! ## Outcome caching
//!
//! Snapshots and line sets are immutable, so each position's outcome is
//! computed once when it is created and stored next to it.
//!
//! ## Ownership
//!
//! Mutation goes through `&mut self`; one owner drives a game at a time.

use std::sync::Arc;

use im::Vector;

use crate::core::{BoardSize, ConfigError, HistoryError, LinePolicy, Mark, MoveError, Snapshot};
use crate::lines::{Line, LineSet};
use crate::rules::{evaluate, winning_line, Outcome};

/// One position in the history.
#[derive(Clone, Debug, PartialEq, Eq)]
struct HistoryEntry {
    snapshot: Snapshot,
    outcome: Outcome,
    /// Cell played to reach this position. `None` for the empty board.
    played: Option<usize>,
}

/// The position currently shown, ready for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentPosition<'a> {
    /// History index of this position.
    pub index: usize,
    pub snapshot: &'a Snapshot,
    pub outcome: Outcome,
    /// Mark that would play next.
    pub next_mark: Mark,
}

/// Snapshot history of one game.
#[derive(Clone, Debug)]
pub struct MoveHistory {
    lines: Arc<LineSet>,
    entries: Vector<HistoryEntry>,
    current: usize,
}

impl MoveHistory {
    /// Start a game on the board described by `lines`.
    #[must_use]
    pub fn new(lines: Arc<LineSet>) -> Self {
        let snapshot = Snapshot::empty(lines.size().cell_count());
        let outcome = evaluate(&snapshot, &lines);
        let mut entries = Vector::new();
        entries.push_back(HistoryEntry {
            snapshot,
            outcome,
            played: None,
        });

        Self {
            lines,
            entries,
            current: 0,
        }
    }

    /// Start a game on `size`, generating its line set.
    pub fn new_game(size: BoardSize, policy: LinePolicy) -> Result<Self, ConfigError> {
        Ok(Self::new(Arc::new(LineSet::generate(size, policy)?)))
    }

    fn entry(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.current]
    }

    /// Place the current player's mark on `cell`.
    ///
    /// On success the redo branch is discarded and the new position becomes
    /// current. On error nothing changes.
    pub fn play(&mut self, cell: usize) -> Result<Outcome, MoveError> {
        let entry = self.current_entry();
        let cell_count = entry.snapshot.len();

        let target = entry
            .snapshot
            .get(cell)
            .ok_or(MoveError::OutOfRange { cell, cell_count })?;
        if entry.outcome.is_finished() {
            tracing::debug!(cell, outcome = %entry.outcome, "move rejected: game over");
            return Err(MoveError::GameOver(entry.outcome));
        }
        if !target.is_empty() {
            tracing::debug!(cell, "move rejected: cell occupied");
            return Err(MoveError::Occupied { cell });
        }

        let mark = Mark::for_turn(self.current);
        let snapshot = entry
            .snapshot
            .with_cell(cell, mark.to_cell())
            .ok_or(MoveError::OutOfRange { cell, cell_count })?;
        let outcome = evaluate(&snapshot, &self.lines);

        self.entries.truncate(self.current + 1);
        self.entries.push_back(HistoryEntry {
            snapshot,
            outcome,
            played: Some(cell),
        });
        self.current = self.entries.len() - 1;

        tracing::trace!(cell, %mark, index = self.current, "move played");
        if outcome.is_finished() {
            tracing::info!(%outcome, moves = self.current, "game finished");
        }

        Ok(outcome)
    }

    /// Show the position at `index`. History is left intact.
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "jump rejected");
            return Err(HistoryError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.current = index;
        tracing::trace!(index, "jumped");
        Ok(())
    }

    /// Step back one position.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        match self.current.checked_sub(1) {
            Some(index) => self.jump_to(index),
            None => Err(HistoryError::OutOfRange {
                index: 0,
                len: self.entries.len(),
            }),
        }
    }

    /// Step forward one position along the kept branch.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        self.jump_to(self.current + 1)
    }

    /// The position currently shown.
    #[must_use]
    pub fn current(&self) -> CurrentPosition<'_> {
        let entry = self.current_entry();
        CurrentPosition {
            index: self.current,
            snapshot: &entry.snapshot,
            outcome: entry.outcome,
            next_mark: Mark::for_turn(self.current),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of positions, including the empty board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the empty board is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn snapshot_at(&self, index: usize) -> Option<&Snapshot> {
        self.entry(index).map(|e| &e.snapshot)
    }

    #[must_use]
    pub fn outcome_at(&self, index: usize) -> Option<Outcome> {
        self.entry(index).map(|e| e.outcome)
    }

    /// Cell played to reach position `index`. `None` for the empty board or
    /// an index past the end.
    #[must_use]
    pub fn move_at(&self, index: usize) -> Option<usize> {
        self.entry(index).and_then(|e| e.played)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter().map(|e| &e.snapshot)
    }

    /// Winning line of the current position, for highlighting.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Mark, &Line)> {
        winning_line(&self.current_entry().snapshot, &self.lines)
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.lines.size()
    }

    #[must_use]
    pub fn line_set(&self) -> &Arc<LineSet> {
        &self.lines
    }
}
