//! Tests for win detection over boards of arbitrary size.

use gridline::{Game, GameConfig, Player, detect};

/// Plays the given cell indices in order, asserting each is accepted.
fn play(game: &mut Game, indices: &[usize]) {
    for &index in indices {
        assert!(game.place(index), "move at {index} should be accepted");
    }
}

#[test]
fn empty_board_has_no_winner() {
    let game = Game::new(GameConfig::new(3, 3));
    assert_eq!(game.winner(), None);
    assert_eq!(detect(game.board(), 3), None);
}

#[test]
fn top_row_wins_on_classic_board() {
    let mut game = Game::new(GameConfig::new(3, 3));
    // X takes the top row while O fills the middle.
    play(&mut game, &[0, 4, 1, 5, 2]);

    let win = game.winner().expect("X should have won");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, vec![0, 1, 2]);
}

#[test]
fn column_wins() {
    let mut game = Game::new(GameConfig::new(3, 3));
    play(&mut game, &[0, 1, 3, 2, 6]);

    let win = game.winner().expect("X should have won");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, vec![0, 3, 6]);
}

#[test]
fn diagonal_wins_on_larger_board() {
    let mut game = Game::new(GameConfig::new(4, 3));
    play(&mut game, &[0, 1, 5, 4, 10]);

    let win = game.winner().expect("X should have won");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, vec![0, 5, 10]);
}

#[test]
fn anti_diagonal_wins() {
    let mut game = Game::new(GameConfig::new(3, 3));
    play(&mut game, &[6, 0, 4, 1, 2]);

    let win = game.winner().expect("X should have won");
    assert_eq!(win.player, Player::X);
    // Walk order is bottom-left to top-right.
    assert_eq!(win.line, vec![6, 4, 2]);
}

#[test]
fn second_player_can_win() {
    let mut game = Game::new(GameConfig::new(3, 3));
    play(&mut game, &[0, 3, 1, 4, 8, 5]);

    let win = game.winner().expect("O should have won");
    assert_eq!(win.player, Player::O);
    assert_eq!(win.line, vec![3, 4, 5]);
}

#[test]
fn first_line_in_enumeration_order_is_reported() {
    // X's final move at index 5 completes both the row {4, 5, 6} and
    // the column {1, 5, 9}. The column anchors at (0, 1), which
    // precedes the row's anchor (1, 0) in row-major order.
    let mut game = Game::new(GameConfig::new(4, 3));
    play(&mut game, &[4, 3, 6, 7, 1, 12, 9, 15, 5]);

    let win = game.winner().expect("X should have won");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, vec![1, 5, 9]);
}

#[test]
fn run_length_one_wins_on_first_mark() {
    let mut game = Game::new(GameConfig::new(3, 1));
    play(&mut game, &[4]);

    let win = game.winner().expect("a single mark should win");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, vec![4]);

    // Decided game: no further moves.
    assert!(!game.place(0));
}

#[test]
fn run_longer_than_board_never_wins() {
    let mut game = Game::new(GameConfig::new(2, 3));
    // Fill the whole board; no candidate line ever fits.
    play(&mut game, &[0, 1, 2, 3]);

    assert_eq!(game.winner(), None);
    assert_eq!(game.history().len(), 5);
}

#[test]
fn detection_is_pure_and_repeatable() {
    let mut game = Game::new(GameConfig::new(3, 3));
    play(&mut game, &[0, 4, 1, 5, 2]);

    let first = game.winner();
    let second = game.winner();
    assert_eq!(first, second);
}
