//! Gridline - generalized n-in-a-row game logic.
//!
//! Classic tic-tac-toe generalized to an m×m board where `run_length`
//! consecutive marks win. The library owns the whole game core:
//!
//! - **Board**: flat row-major grid of cells
//! - **Win detection**: pure scan for the first winning run
//! - **History**: immutable board snapshots with time travel
//! - **Game**: the move/history state machine a frontend drives
//! - **View**: presentation data (cells, move list, status line)
//!
//! # Example
//!
//! ```
//! use gridline::{Game, GameConfig, Player};
//!
//! let mut game = Game::new(GameConfig::new(3, 3));
//! assert_eq!(game.next_player(), Player::X);
//! assert!(game.place(4));
//! assert_eq!(game.next_player(), Player::O);
//!
//! // Time travel: jump back to the start, then branch.
//! game.jump_to(0);
//! assert!(game.place(0));
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod game;
mod history;
mod types;
mod win;

// Presentation data for frontends
pub mod view;

// Crate-level exports - board and cells
pub use board::{Board, CellOutOfBounds};

// Crate-level exports - game state machine
pub use game::{Game, GameConfig};

// Crate-level exports - move history
pub use history::{History, HistoryEntry};

// Crate-level exports - domain types
pub use types::{Cell, Player};

// Crate-level exports - win detection
pub use win::{Win, detect};
