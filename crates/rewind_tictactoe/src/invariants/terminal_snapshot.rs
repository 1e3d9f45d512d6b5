//! Terminal snapshot invariant: nothing is played after a win.

use super::super::History;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: only the last entry may hold a winning line.
pub struct TerminalSnapshotInvariant;

impl Invariant<History> for TerminalSnapshotInvariant {
    fn holds(history: &History) -> bool {
        let records = history.records();
        let last = records.len().saturating_sub(1);
        records[..last]
            .iter()
            .all(|record| check_winner(record.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won position"
    }
}
