//! Move history as immutable board snapshots.

use crate::board::Board;
use serde::{Deserialize, Serialize};

/// One step of the game: a board snapshot plus the (row, col) of the
/// move that produced it. Entry 0 has no move.
///
/// Entries never change after creation; time travel re-reads old
/// snapshots rather than undoing moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<(usize, usize)>,
}

impl HistoryEntry {
    /// The all-empty starting entry.
    pub(crate) fn initial(size: usize) -> Self {
        Self {
            board: Board::new(size),
            last_move: None,
        }
    }

    /// Entry for a board produced by a move at (row, col).
    pub(crate) fn with_move(board: Board, row: usize, col: usize) -> Self {
        Self {
            board,
            last_move: Some((row, col)),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The (row, col) of the move that produced this entry, if any.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }
}

/// Ordered list of snapshots, never empty. A move made from a past
/// step discards the entries after it before appending (branching,
/// not merging).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty starting entry.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::initial(size)],
        }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A constructed history is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the entry at the given step.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries in play order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops everything after `active_step`, then appends.
    pub(crate) fn branch(&mut self, active_step: usize, entry: HistoryEntry) {
        self.entries.truncate(active_step + 1);
        self.entries.push(entry);
    }
}
