//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

/// Error that can occur when validating or applying a move, or when
/// navigating the history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A raw cell index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    InvalidPosition(usize),

    /// A history index past the end of the history.
    #[display("No move #{} (history has {} entries)", requested, len)]
    NoSuchMove {
        /// The requested history index.
        requested: usize,
        /// Number of entries in the history.
        len: usize,
    },

    /// An invariant was violated.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true for rejections the UI ignores silently.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, MoveError::SquareOccupied(_) | MoveError::GameOver)
    }
}
