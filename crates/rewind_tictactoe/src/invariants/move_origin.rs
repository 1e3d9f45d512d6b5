//! Move origin invariant: only the initial board lacks an originating move.

use super::super::{Board, History, Player, Square};
use super::Invariant;

/// Invariant: entry 0 is the empty board with no move; every later entry
/// records the move that produced it, played by the player whose turn it
/// was, into a square that was empty.
pub struct MoveOriginInvariant;

impl Invariant<History> for MoveOriginInvariant {
    fn holds(history: &History) -> bool {
        let records = history.records();

        let Some(first) = records.first() else {
            return false;
        };
        if first.placed().is_some() || *first.board() != Board::new() {
            return false;
        }

        records.windows(2).enumerate().all(|(i, pair)| {
            let [before, after] = pair else {
                return false;
            };
            match after.placed() {
                Some(mov) => {
                    mov.player == Player::for_turn(i)
                        && before.board().is_empty(mov.position)
                        && after.board().get(mov.position) == Square::Occupied(mov.player)
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Only the initial board lacks an originating move"
    }
}
