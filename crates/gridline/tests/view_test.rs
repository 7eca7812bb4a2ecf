//! Tests for the presentation data a frontend renders.

use gridline::{Game, GameConfig, Player, view};

#[test]
fn fresh_game_status_names_x() {
    let game = Game::new(GameConfig::new(3, 3));
    assert_eq!(view::status(&game), "Next player: X");
}

#[test]
fn status_tracks_turns_and_winner() {
    let mut game = Game::new(GameConfig::new(3, 3));
    assert!(game.place(0));
    assert_eq!(view::status(&game), "Next player: O");

    for index in [4, 1, 5, 2] {
        assert!(game.place(index));
    }
    assert_eq!(view::status(&game), "Winner: X");
}

#[test]
fn winning_cells_are_flagged() {
    let mut game = Game::new(GameConfig::new(4, 3));
    for index in [0, 1, 5, 4, 10] {
        assert!(game.place(index));
    }

    let cells = view::cells(&game);
    assert_eq!(cells.len(), 16);
    for (index, cell) in cells.iter().enumerate() {
        let expected = matches!(index, 0 | 5 | 10);
        assert_eq!(cell.winning, expected, "cell {index}");
    }
    assert_eq!(cells[0].occupant, Some(Player::X));
    assert_eq!(cells[1].occupant, Some(Player::O));
    assert_eq!(cells[2].occupant, None);
}

#[test]
fn no_cell_is_flagged_without_a_winner() {
    let mut game = Game::new(GameConfig::new(3, 3));
    assert!(game.place(4));
    assert!(view::cells(&game).iter().all(|c| !c.winning));
}

#[test]
fn move_labels_use_one_based_column_then_row() {
    let mut game = Game::new(GameConfig::new(3, 3));
    assert!(game.place(4)); // row 1, col 1
    assert!(game.place(2)); // row 0, col 2

    let moves = view::moves(&game);
    assert_eq!(moves.len(), 3);
    assert_eq!(moves[0].text, "Game start");
    assert_eq!(moves[1].text, "Move #1 (2, 2)");
    assert_eq!(moves[2].text, "Move #2 (3, 1)");
}

#[test]
fn active_step_is_marked_current() {
    let mut game = Game::new(GameConfig::new(3, 3));
    assert!(game.place(4));
    assert!(game.place(2));
    game.jump_to(1);

    let moves = view::moves(&game);
    let current: Vec<usize> = moves.iter().filter(|m| m.current).map(|m| m.step).collect();
    assert_eq!(current, vec![1]);
}

#[test]
fn descending_sort_reverses_the_list() {
    let mut game = Game::new(GameConfig::new(3, 3));
    assert!(game.place(4));
    assert!(game.place(2));

    game.toggle_sort_order();
    let moves = view::moves(&game);
    assert_eq!(moves[0].step, 2);
    assert_eq!(moves[2].text, "Game start");

    // Labels keep their step numbers; only the order flips.
    assert_eq!(moves[1].text, "Move #1 (2, 2)");
}
