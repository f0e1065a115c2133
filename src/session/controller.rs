//! Session controller: the thin layer a UI talks to.
//!
//! Owns the `MoveHistory` of the game in progress, picks the board size when
//! a game starts, and turns engine state into the strings a presenter shows:
//! the status line, the move list and a text board.

use crate::core::{BoardSize, ConfigError, GameConfig, GameRng, HistoryError, MoveError};
use crate::history::MoveHistory;
use crate::lines::LineSetCache;
use crate::rules::Outcome;

/// One row of the move list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button label.
    pub label: String,
    /// Whether this is the position currently shown.
    pub is_current: bool,
}

/// Game session driven by a presenter.
#[derive(Clone, Debug)]
pub struct GameController {
    config: GameConfig,
    rng: GameRng,
    cache: LineSetCache,
    history: MoveHistory,
}

impl GameController {
    /// Validate `config` and start the first game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed);
        let mut cache = LineSetCache::new();
        let history = Self::start(&config, &mut rng, &mut cache)?;

        Ok(Self {
            config,
            rng,
            cache,
            history,
        })
    }

    fn start(
        config: &GameConfig,
        rng: &mut GameRng,
        cache: &mut LineSetCache,
    ) -> Result<MoveHistory, ConfigError> {
        let size = config.board.choose(rng);
        let lines = cache.get_or_generate(size, config.lines)?;
        tracing::info!(%size, lines = lines.len(), "new game");
        Ok(MoveHistory::new(lines))
    }

    /// Abandon the current game and start another, re-drawing the board size.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.history = Self::start(&self.config, &mut self.rng, &mut self.cache)?;
        Ok(())
    }

    /// A click on `cell`.
    pub fn click(&mut self, cell: usize) -> Result<Outcome, MoveError> {
        self.history.play(cell)
    }

    /// A click on a move-list entry.
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.history.board_size()
    }

    /// Status line for the current position.
    #[must_use]
    pub fn status(&self) -> String {
        let current = self.history.current();
        match current.outcome {
            Outcome::Winner(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "Draw".to_string(),
            Outcome::Ongoing => format!("Next player: {}", current.next_mark),
        }
    }

    /// One entry per position, oldest first.
    #[must_use]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let current = self.history.current_index();
        (0..self.history.len())
            .map(|index| {
                let label = if index == current {
                    format!("You are at move {}", index)
                } else if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", index)
                };
                MoveEntry {
                    index,
                    label,
                    is_current: index == current,
                }
            })
            .collect()
    }

    /// Text rendering of the current board.
    ///
    /// Occupied cells show their mark, empty cells their index:
    ///
    /// ```text
    /// X|1|2
    /// -+-+-
    /// 3|O|5
    /// -+-+-
    /// 6|7|8
    /// ```
    #[must_use]
    pub fn render_board(&self) -> String {
        let size = self.board_size();
        let snapshot = self.history.current().snapshot;
        let width = (size.cell_count() - 1).to_string().len();
        let separator = vec!["-".repeat(width); size.columns()].join("+");

        let rows: Vec<String> = (0..size.rows())
            .map(|row| {
                (0..size.columns())
                    .map(|col| {
                        let index = size.to_index(row, col);
                        match snapshot.mark_at(index) {
                            Some(mark) => format!("{:>width$}", mark.to_string()),
                            None => format!("{:>width$}", index),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        rows.join(&format!("\n{}\n", separator))
    }
}
