//! Game status derived from a board snapshot.

use super::rules::{WinningLine, check_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game at the displayed snapshot.
///
/// `Won` and `Draw` are terminal: no further moves are accepted from
/// that snapshot, though the history can still be navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move.
        to_move: Player,
    },
    /// Game ended in a win.
    Won(WinningLine),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Classifies a board given the player whose turn it would be.
    #[instrument]
    pub fn of(board: &Board, to_move: Player) -> Self {
        if let Some(line) = check_winner(board) {
            GameStatus::Won(line)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { to_move }
        }
    }

    /// Returns true if no more moves can be played.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(line.player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "Next player: {}", to_move),
            GameStatus::Won(line) => write!(f, "Winner: {}", line.player),
            GameStatus::Draw => write!(f, "It's a draw."),
        }
    }
}
