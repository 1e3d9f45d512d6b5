//! Navigable list of past moves.

use super::action::Move;
use super::history::History;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
///
/// Defaults to [`SortOrder::Ascending`] (oldest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the button that toggles away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One navigable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    pub move_number: usize,
    /// The move that produced the entry; `None` for the game start.
    pub placed: Option<Move>,
}

impl MoveListEntry {
    /// Human-readable description of the jump.
    pub fn description(&self) -> String {
        match self.placed {
            None => "Go to game start".to_string(),
            Some(mov) => format!(
                "Go to move #{} Player {}: Row {}, Col {}",
                self.move_number,
                mov.player,
                mov.position.row(),
                mov.position.col()
            ),
        }
    }
}

impl std::fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Builds the move list for `history` in the given order.
///
/// The entry for the cursor is omitted. Neither the history nor the
/// cursor is changed.
#[instrument(skip(history), fields(len = history.len(), cursor = history.cursor()))]
pub fn move_list(history: &History, order: SortOrder) -> Vec<MoveListEntry> {
    let entries = history
        .records()
        .iter()
        .enumerate()
        .filter(|(move_number, _)| *move_number != history.cursor())
        .map(|(move_number, record)| MoveListEntry {
            move_number,
            placed: *record.placed(),
        });

    match order {
        SortOrder::Ascending => entries.collect(),
        SortOrder::Descending => entries.rev().collect(),
    }
}

/// Caption describing where the cursor sits.
pub fn position_caption(history: &History) -> String {
    match history.cursor() {
        0 => "Choose a square".to_string(),
        n => format!("You are at move #{}", n),
    }
}
