//! End-to-end tests of a game session driven through the public API.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_tictactoe::{GameStatus, Player, Position, SortOrder, Square};
use rewind_tui::{App, Settings, replay};
use std::io::Write;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn play_digits(app: &mut App, digits: &str) {
    for c in digits.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_branching_game_through_keys() {
    let mut app = App::new(&Settings::default());
    play_digits(&mut app, "5193");
    assert_eq!(app.history().len(), 5);

    // Jump back to the start via the move list and play a new opening.
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.history().cursor(), 0);
    assert_eq!(app.caption(), "Choose a square");

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.history().len(), 2);
    assert_eq!(
        app.history().current().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(app.history().current().get(Position::Center), Square::Empty);
}

#[test]
fn test_draw_reached_through_keys() {
    let mut app = App::new(&Settings::default());
    // X O X / X O O / O X X
    play_digits(&mut app, "123546879");
    assert_eq!(app.history().status(), GameStatus::Draw);
    assert_eq!(app.status_line(), "It's a draw.");
}

#[test]
fn test_settings_file_sets_initial_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sort_order = \"descending\"\nshow_hints = false").unwrap();
    let settings = Settings::load_or_default(file.path()).unwrap();

    let mut app = App::new(&settings);
    play_digits(&mut app, "59");
    assert_eq!(app.order(), &SortOrder::Descending);
    let numbers: Vec<usize> = app.entries().iter().map(|e| e.move_number).collect();
    assert_eq!(numbers, vec![1, 0]);
    assert!(!*app.show_hints());
}

#[test]
fn test_replay_matches_interactive_play() {
    let mut app = App::new(&Settings::default());
    play_digits(&mut app, "1425");

    let moves: Vec<String> = ["1", "4", "2", "5"].iter().map(|s| s.to_string()).collect();
    let report = replay(&moves, None, SortOrder::Ascending).unwrap();

    assert_eq!(&report.board, app.history().current());
    assert_eq!(report.status_line, app.status_line());
    assert_eq!(report.entries, app.entries());
}
