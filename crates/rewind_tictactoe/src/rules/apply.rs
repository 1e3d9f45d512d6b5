//! Move application for a single board snapshot.

use super::super::action::{Move, MoveError};
use super::super::contracts::LegalMove;
use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Places `player`'s mark at `pos`, returning the resulting board.
///
/// The input board is never modified. Rejected with
/// [`MoveError::GameOver`] if the board already has a winner and with
/// [`MoveError::SquareOccupied`] if the square is taken.
#[instrument]
pub fn apply_move(board: &Board, pos: Position, player: Player) -> Result<Board, MoveError> {
    LegalMove::check(&Move::new(player, pos), board)?;

    let mut next = *board;
    next.set(pos, Square::Occupied(player));
    Ok(next)
}
