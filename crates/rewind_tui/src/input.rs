//! Cursor movement for keyboard navigation of the board.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the edges; other keys leave it unchanged.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => Position::from_row_col(row, col.saturating_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up => Position::from_row_col(row.saturating_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps the digit keys 1-9 to the cells numbered on the board.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Position::from_cell_number(d as usize)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
    }

    #[test]
    fn test_edges_stop_cursor() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_position(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(digit_position(KeyCode::Char('9')), Some(Position::BottomRight));
        assert_eq!(digit_position(KeyCode::Char('0')), None);
        assert_eq!(digit_position(KeyCode::Char('x')), None);
    }
}
