//! Tests for move history navigation and game outcomes.

use rewind_tictactoe::{
    GameStatus, History, Move, MoveError, Player, Position, SortOrder, Square, move_list,
};

fn replay(positions: &[Position]) -> History {
    let mut history = History::new();
    for pos in positions {
        history.play(*pos).expect("Valid move");
    }
    history
}

#[test]
fn test_diagonal_win_reports_line() {
    // X: 0, 4, 8; O: 1, 2
    let history = replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ]);

    match history.status() {
        GameStatus::Won(line) => {
            assert_eq!(line.player, Player::X);
            assert_eq!(line.indices(), [0, 4, 8]);
        }
        other => panic!("Expected win, got {:?}", other),
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let history = replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ]);

    assert_eq!(history.status(), GameStatus::Draw);
    assert_eq!(history.status().winner(), None);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut history = replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ]);
    let before = history.clone();

    assert_eq!(history.play(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(history, before);
}

#[test]
fn test_navigation_allowed_after_game_over() {
    let mut history = replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ]);

    history.jump_to(2).expect("Entry exists");
    assert_eq!(history.status(), GameStatus::InProgress { to_move: Player::X });

    // Playing from the past forks the game again.
    history.play(Position::BottomRight).expect("Valid move");
    assert_eq!(history.len(), 4);
    assert!(!history.status().is_terminal());
}

#[test]
fn test_jump_then_play_truncates() {
    let mut history = replay(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
        Position::BottomLeft,
    ]);
    let k = 2;

    history.jump_to(k).expect("Entry exists");
    history.play(Position::MiddleLeft).expect("Valid move");

    assert_eq!(history.len(), k + 2);
    assert_eq!(history.cursor(), k + 1);
    assert_eq!(
        history.current_record().placed(),
        &Some(Move::new(Player::X, Position::MiddleLeft))
    );
    assert_eq!(history.current().get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_turn_follows_cursor_parity() {
    let mut history = replay(&[Position::Center, Position::TopLeft, Position::BottomRight]);
    for (cursor, expected) in [(0, Player::X), (1, Player::O), (2, Player::X), (3, Player::O)] {
        history.jump_to(cursor).expect("Entry exists");
        assert_eq!(history.to_move(), expected);
    }
}

#[test]
fn test_move_list_follows_cursor() {
    let mut history = replay(&[Position::Center, Position::TopLeft]);
    history.jump_to(1).expect("Entry exists");

    let entries = move_list(&history, SortOrder::Ascending);
    let numbers: Vec<usize> = entries.iter().map(|e| e.move_number).collect();
    assert_eq!(numbers, vec![0, 2]);

    // Building the list leaves the history alone.
    assert_eq!(history.cursor(), 1);
    assert_eq!(history.len(), 3);
}

#[test]
fn test_history_serializes() {
    let history = replay(&[Position::Center]);
    let json = serde_json::to_value(&history).expect("Serializable");
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["records"].as_array().map(Vec::len), Some(2));
    assert!(json["records"][0]["placed"].is_null());
}
