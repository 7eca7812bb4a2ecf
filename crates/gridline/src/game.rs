//! Game state machine: applying moves, time travel, display order.

use crate::board::Board;
use crate::history::{History, HistoryEntry};
use crate::types::{Cell, Player};
use crate::win::Win;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board side length and run length required to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length; the board holds size² cells.
    pub size: usize,
    /// Consecutive marks required to win, conventionally at most `size`.
    pub run_length: usize,
}

impl GameConfig {
    /// Creates a config. A `run_length` larger than `size` is legal
    /// and yields a game nobody can win.
    pub fn new(size: usize, run_length: usize) -> Self {
        Self { size, run_length }
    }
}

impl Default for GameConfig {
    /// Classic 3x3, three in a row.
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// Complete game state: configuration, snapshot history, the active
/// step, and the move-list display order.
///
/// Whether the game is decided is never stored; it is recomputed from
/// the active board on every query, so it cannot drift when the
/// active step moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    history: History,
    active_step: usize,
    sort_ascending: bool,
}

impl Game {
    /// Creates a new game. There is no reset; start over by creating
    /// another game.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            history: History::new(config.size),
            active_step: 0,
            sort_ascending: true,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the active step index.
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// Whether the move list displays oldest first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// The history entry at the active step.
    pub fn current(&self) -> &HistoryEntry {
        // active_step stays in bounds: place() and jump_to() both
        // leave it pointing at an existing entry
        &self.history.entries()[self.active_step]
    }

    /// The board at the active step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Next player to move, derived from step parity: X on even
    /// steps, O on odd.
    pub fn next_player(&self) -> Player {
        if self.active_step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Win on the active board, recomputed on every call.
    pub fn winner(&self) -> Option<Win> {
        self.board().winner(self.config.run_length)
    }

    /// Applies a move at the given cell index for the next player.
    ///
    /// Silently ignored (returns `false`, no state change) when the
    /// active board is already decided, the cell is occupied, or the
    /// index is off the board - the policy of a click handler that
    /// drops bad input rather than reporting it. The return value is
    /// a convenience for callers, not an error channel.
    ///
    /// A move made while viewing a past step discards the later
    /// entries first, so history branches instead of merging.
    #[instrument(skip(self), fields(step = self.active_step))]
    pub fn place(&mut self, index: usize) -> bool {
        if self.winner().is_some() {
            debug!("move ignored: game already decided");
            return false;
        }
        if !self.board().is_empty(index) {
            debug!("move ignored: cell occupied or out of bounds");
            return false;
        }

        let mark = Cell::Occupied(self.next_player());
        let (row, col) = self.board().row_col(index);
        let mut board = self.board().clone();
        if board.set(index, mark).is_err() {
            return false;
        }

        self.history
            .branch(self.active_step, HistoryEntry::with_move(board, row, col));
        self.active_step = self.history.len() - 1;
        debug!(row, col, "move applied");
        true
    }

    /// Jumps to the given step. The caller supplies a step that names
    /// an existing history entry, as a UI listing known entries does;
    /// out-of-range input is a caller bug, not a checked error.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(step < self.history.len(), "step out of range");
        self.active_step = step;
    }

    /// Flips the display order of the move list. Presentation only;
    /// history contents are untouched.
    pub fn toggle_sort_order(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
