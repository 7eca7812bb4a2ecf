//! Win detection over an arbitrary board.

use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A winning run: the occupying player and the board indices of the
/// run, in walk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// Player owning the run.
    pub player: Player,
    /// Board indices of the run; length equals the configured run length.
    pub line: Vec<usize>,
}

/// Walk direction for a candidate line, in tie-break order.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::DownRight,
    Direction::UpRight,
];

impl Direction {
    /// Whether a run of `run_length` anchored at (row, col) stays on
    /// the board.
    fn fits(self, row: usize, col: usize, size: usize, run_length: usize) -> bool {
        match self {
            Direction::Right => size - col >= run_length,
            Direction::Down => size - row >= run_length,
            Direction::DownRight => size - row >= run_length && size - col >= run_length,
            Direction::UpRight => row + 1 >= run_length && size - col >= run_length,
        }
    }

    /// Index of the k-th cell of a run anchored at `base`.
    fn step(self, base: usize, size: usize, k: usize) -> usize {
        match self {
            Direction::Right => base + k,
            Direction::Down => base + k * size,
            Direction::DownRight => base + k + k * size,
            // fits() guarantees row >= k, so base >= k * size
            Direction::UpRight => base + k - k * size,
        }
    }
}

/// Scans the board for the first winning run of `run_length` marks.
///
/// Candidate lines are anchored at every cell in row-major order and
/// walked in four directions per anchor: horizontal, vertical,
/// diagonal (down-right), anti-diagonal (up-right). Enumeration order
/// is fixed, so when several winning runs exist the same one is
/// reported every time.
///
/// A `run_length` of 1 means any occupied cell wins; a `run_length`
/// larger than the board leaves no candidate lines, so nobody can
/// ever win. Pure function, recomputed on every call.
pub fn detect(board: &Board, run_length: usize) -> Option<Win> {
    if run_length == 0 {
        return None;
    }
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let base = board.index_of(row, col);
            for direction in DIRECTIONS {
                if !direction.fits(row, col, size, run_length) {
                    continue;
                }
                let line: Vec<usize> = (0..run_length)
                    .map(|k| direction.step(base, size, k))
                    .collect();
                if let Some(player) = run_owner(board, &line) {
                    return Some(Win { player, line });
                }
            }
        }
    }
    None
}

/// Returns the player holding every cell of the line, if one does.
fn run_owner(board: &Board, line: &[usize]) -> Option<Player> {
    let first = board.get(*line.first()?)?.player()?;
    line.iter()
        .all(|&index| board.get(index).and_then(|cell| cell.player()) == Some(first))
        .then_some(first)
}

impl Board {
    /// Checks for a winning run of the given length.
    pub fn winner(&self, run_length: usize) -> Option<Win> {
        detect(self, run_length)
    }
}
