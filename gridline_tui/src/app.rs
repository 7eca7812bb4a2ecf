//! Application state and input handling.

use crossterm::event::KeyCode;
use gridline::{Game, GameConfig};
use tracing::debug;

/// Main application state: the one game instance plus the board
/// cursor standing in for mouse clicks.
pub struct App {
    game: Game,
    cursor: (usize, usize),
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            cursor: (0, 0),
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor as (row, col).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at_cursor(),
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            KeyCode::Home => self.game.jump_to(0),
            KeyCode::End => self.game.jump_to(self.game.history().len() - 1),
            KeyCode::Char('s') => self.game.toggle_sort_order(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        let size = self.game.config().size as isize;
        let (row, col) = self.cursor;
        let row = (row as isize + row_delta).clamp(0, size - 1);
        let col = (col as isize + col_delta).clamp(0, size - 1);
        self.cursor = (row as usize, col as usize);
    }

    fn place_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        let index = self.game.board().index_of(row, col);
        if !self.game.place(index) {
            debug!(row, col, "move ignored");
        }
    }

    fn step_back(&mut self) {
        let step = self.game.active_step();
        if step > 0 {
            self.game.jump_to(step - 1);
        }
    }

    fn step_forward(&mut self) {
        let step = self.game.active_step();
        if step + 1 < self.game.history().len() {
            self.game.jump_to(step + 1);
        }
    }
}
