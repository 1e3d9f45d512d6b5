//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::{Move, MoveError};
use super::history::History;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::check_winner;
use super::{Board, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: Nobody has won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] if the board has a winner.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match check_winner(board) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the target is taken.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if !board.is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the square is empty and
/// the game is still going.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        SquareIsEmpty::check(mov, board)?;
        GameNotOver::check(board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a move from the history cursor.
///
/// Preconditions:
/// - Square under the cursor snapshot must be empty
/// - Snapshot under the cursor has no winner
///
/// Postconditions:
/// - History invariants hold
/// - Cursor sits on the last entry
/// - Entries up to the old cursor are untouched
pub struct PlayContract;

impl Contract<History, Position> for PlayContract {
    fn pre(history: &History, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(&Move::new(history.to_move(), *pos), history.current())
    }

    fn post(before: &History, after: &History) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.cursor() + 1 != after.len() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor is not on the newest entry".to_string(),
            ));
        }

        let kept = before.cursor() + 1;
        if after.len() != kept + 1 || after.records()[..kept] != before.records()[..kept] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history before the cursor changed".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let history = History::new();
        assert!(PlayContract::pre(&history, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut history = History::new();
        history.play(Position::Center).unwrap();
        assert!(matches!(
            PlayContract::pre(&history, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_checks_displayed_snapshot() {
        let mut history = History::new();
        history.play(Position::Center).unwrap();
        history.jump_to(0).unwrap();
        assert!(PlayContract::pre(&history, &Position::Center).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_play() {
        let mut before = History::new();
        before.play(Position::Center).unwrap();
        let mut after = before.clone();
        after.play(Position::TopLeft).unwrap();
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_rewritten_past() {
        let mut before = History::new();
        before.play(Position::Center).unwrap();

        let mut after = History::new();
        after.play(Position::TopLeft).unwrap();
        after.play(Position::Center).unwrap();

        assert!(PlayContract::post(&before, &after).is_err());
    }
}
