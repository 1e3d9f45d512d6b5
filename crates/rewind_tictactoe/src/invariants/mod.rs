//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every history a
//! game can reach. They are checked after each play in debug builds and
//! whenever a history is rebuilt from outside records.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod move_origin;
pub mod terminal_snapshot;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use move_origin::MoveOriginInvariant;
pub use terminal_snapshot::TerminalSnapshotInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    CursorInBoundsInvariant,
    MoveOriginInvariant,
    AlternatingMarksInvariant,
    TerminalSnapshotInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, History, Move, MoveRecord, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut history = History::new();
        history.play(Position::TopLeft).unwrap();
        history.play(Position::Center).unwrap();
        history.play(Position::TopRight).unwrap();
        history.jump_to(1).unwrap();
        history.play(Position::BottomLeft).unwrap();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // O opens the game: the origin and alternation checks both fail.
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        let records = vec![
            MoveRecord::initial(),
            MoveRecord::new(board, Some(Move::new(Player::O, Position::Center))),
        ];
        let history = History::from_records(records, 1);
        let Err(crate::MoveError::InvariantViolation(message)) = history else {
            panic!("Expected invariant violation");
        };
        assert!(message.contains(MoveOriginInvariant::description()));
        assert!(message.contains(AlternatingMarksInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CursorInBoundsInvariant, MoveOriginInvariant);
        assert!(TwoInvariants::check_all(&History::new()).is_ok());
    }
}
