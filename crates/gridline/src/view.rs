//! Presentation data derived from a game.
//!
//! Frontends read these instead of poking at game internals, keeping
//! "is the game decided" a derived query rather than widget state.

use crate::game::Game;
use crate::types::Player;

/// One board cell prepared for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Occupant, if any.
    pub occupant: Option<Player>,
    /// Whether this cell belongs to the winning run.
    pub winning: bool,
}

/// One history entry prepared for the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLabel {
    /// History step this label names.
    pub step: usize,
    /// Whether this is the active step.
    pub current: bool,
    /// Human-readable description.
    pub text: String,
}

/// Per-cell render data for the active board, row-major.
pub fn cells(game: &Game) -> Vec<CellView> {
    let win = game.winner();
    game.board()
        .cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| CellView {
            occupant: cell.player(),
            winning: win.as_ref().is_some_and(|w| w.line.contains(&index)),
        })
        .collect()
}

/// Move list labels in display order. Moves are labeled by 1-based
/// (column, row); entry 0 is "Game start".
pub fn moves(game: &Game) -> Vec<MoveLabel> {
    let mut labels: Vec<MoveLabel> = game
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(step, entry)| {
            let text = match entry.last_move() {
                Some((row, col)) => format!("Move #{} ({}, {})", step, col + 1, row + 1),
                None => "Game start".to_string(),
            };
            MoveLabel {
                step,
                current: step == game.active_step(),
                text,
            }
        })
        .collect();
    if !game.sort_ascending() {
        labels.reverse();
    }
    labels
}

/// Status line: the winner when the game is decided, otherwise whose
/// turn it is.
pub fn status(game: &Game) -> String {
    match game.winner() {
        Some(win) => format!("Winner: {}", win.player),
        None => format!("Next player: {}", game.next_player()),
    }
}
