//! Alternating marks invariant: each snapshot adds exactly one mark,
//! X first, then alternating.

use super::super::{History, Player, Position, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which
/// changes from empty to the mark of the player whose turn it was.
pub struct AlternatingMarksInvariant;

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        history.records().windows(2).enumerate().all(|(i, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let expected = Square::Occupied(Player::for_turn(i));
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
                .collect();

            matches!(changed.as_slice(), [pos]
                if before.board().is_empty(*pos) && after.board().get(*pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark, alternating X, O, X, ..."
    }
}
