//! Cursor bounds invariant: the cursor always selects an existing entry.

use super::super::History;
use super::Invariant;

/// Invariant: `cursor < len` and the history is never empty.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.records().len()
    }

    fn description() -> &'static str {
        "Cursor selects an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveRecord, Position};

    #[test]
    fn test_holds_while_navigating() {
        let mut history = History::new();
        history.play(Position::Center).unwrap();
        assert!(CursorInBoundsInvariant::holds(&history));
        history.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&history));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert!(History::from_records(vec![MoveRecord::initial()], 3).is_err());
    }
}
