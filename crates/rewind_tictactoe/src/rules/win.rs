//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed triple and the player occupying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player holding all three squares.
    pub player: Player,
    /// The three positions, in line order.
    pub positions: [Position; 3],
}

impl WinningLine {
    /// Returns true if the position is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Returns the positions as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] whose squares are all held by one
/// player, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    for positions in LINES {
        let [a, b, c] = positions;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(WinningLine { player, positions });
        }
    }

    None
}
