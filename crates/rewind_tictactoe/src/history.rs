//! Branchable move history with a cursor.
//!
//! The history is a sequence of board snapshots. Entry 0 is always the
//! empty board; every later entry records the move that produced it.
//! A cursor selects the displayed snapshot. Playing from an earlier
//! cursor discards the forward branch before appending.

use super::action::{Move, MoveError};
#[cfg(debug_assertions)]
use super::contracts::{Contract, PlayContract};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::apply_move;
use super::status::GameStatus;
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A board snapshot and the move that produced it.
///
/// `placed` is `None` only for the initial empty board at history
/// position 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The board after the move.
    board: Board,
    /// The originating move.
    placed: Option<Move>,
}

impl MoveRecord {
    /// Creates a record from raw parts.
    ///
    /// Records built this way are only accepted into a [`History`] by
    /// [`History::from_records`], which validates them.
    pub fn new(board: Board, placed: Option<Move>) -> Self {
        Self { board, placed }
    }

    /// The record at history position 0.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }
}

/// Move history plus the cursor selecting the displayed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    records: Vec<MoveRecord>,
    cursor: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::initial()],
            cursor: 0,
        }
    }

    /// Builds a history from externally supplied records.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] if the records are not a
    /// legal game from the empty board (missing or extra originating
    /// moves, wrong player order, play after a win) or the cursor is out
    /// of bounds.
    #[instrument(skip(records), fields(len = records.len()))]
    pub fn from_records(records: Vec<MoveRecord>, cursor: usize) -> Result<Self, MoveError> {
        let history = Self { records, cursor };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })?;
        Ok(history)
    }

    /// Returns all records, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Number of entries, including the initial board.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a history holds at least the initial board.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The record under the cursor.
    pub fn current_record(&self) -> &MoveRecord {
        &self.records[self.cursor]
    }

    /// The board under the cursor.
    pub fn current(&self) -> &Board {
        &self.current_record().board
    }

    /// The player to move at the cursor, derived from cursor parity.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.cursor)
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current(), self.to_move())
    }

    /// Plays a mark at `pos` on the displayed snapshot.
    ///
    /// Any entries after the cursor are discarded, the new record is
    /// appended and the cursor moves to it. On rejection nothing changes.
    ///
    /// # Errors
    ///
    /// [`MoveError::SquareOccupied`] or [`MoveError::GameOver`].
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<&MoveRecord, MoveError> {
        let next = self.branch_with(pos)?;

        let discarded = self.records.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding forward branch");
        }
        *self = next;

        info!(move_number = self.cursor, %pos, "Move played");
        Ok(self.current_record())
    }

    /// Builds the history that playing `pos` would produce, leaving `self`
    /// untouched. Debug builds also check the
    /// [`PlayContract`](crate::PlayContract) postcondition.
    fn branch_with(&self, pos: Position) -> Result<History, MoveError> {
        let player = self.to_move();
        let board = apply_move(self.current(), pos, player)?;

        let mut records = self.records[..=self.cursor].to_vec();
        records.push(MoveRecord::new(board, Some(Move::new(player, pos))));
        let next = History {
            cursor: records.len() - 1,
            records,
        };

        #[cfg(debug_assertions)]
        PlayContract::post(self, &next)?;

        Ok(next)
    }

    /// Plays a mark at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPosition`] for indices past 8, otherwise as
    /// [`History::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<&MoveRecord, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidPosition(index))?;
        self.play(pos)
    }

    /// Moves the cursor to history entry `move_number` without changing
    /// the history.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoSuchMove`] if the entry does not exist.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        if move_number >= self.records.len() {
            return Err(MoveError::NoSuchMove {
                requested: move_number,
                len: self.records.len(),
            });
        }
        debug!(from = self.cursor, to = move_number, "Jumping");
        self.cursor = move_number;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn played(positions: &[Position]) -> History {
        let mut history = History::new();
        for pos in positions {
            history.play(*pos).unwrap();
        }
        history
    }

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), &Board::new());
        assert_eq!(history.current_record().placed(), &None);
        assert!(!history.is_empty());
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut history = History::new();
        let record = *history.play(Position::Center).unwrap();
        assert_eq!(record.placed(), &Some(Move::new(Player::X, Position::Center)));
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_rejected_play_changes_nothing() {
        let mut history = played(&[Position::Center]);
        let before = history.clone();
        assert_eq!(
            history.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_rejected_play_after_jump_keeps_forward_branch() {
        let mut history = played(&[Position::Center, Position::TopLeft]);
        history.jump_to(1).unwrap();
        let before = history.clone();
        assert!(history.play(Position::Center).is_err());
        assert_eq!(history, before);
        assert_eq!(history.len(), 3);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_does_not_commit() {
        let good = played(&[Position::Center]);
        let mut corrupt = History {
            records: vec![
                MoveRecord::initial(),
                MoveRecord::new(*good.current(), None),
            ],
            cursor: 1,
        };
        let before = corrupt.clone();
        assert!(matches!(
            corrupt.play(Position::TopLeft),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(corrupt, before);
    }

    #[test]
    fn test_play_index_bounds() {
        let mut history = History::new();
        assert!(matches!(
            history.play_index(9),
            Err(MoveError::InvalidPosition(9))
        ));
        assert!(history.play_index(8).is_ok());
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut history = played(&[Position::Center, Position::TopLeft, Position::BottomRight]);
        history.jump_to(1).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.to_move(), Player::O);
        assert_eq!(history.current().get(Position::TopLeft), Square::Empty);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = played(&[Position::Center]);
        assert_eq!(
            history.jump_to(2),
            Err(MoveError::NoSuchMove {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_play_after_jump_discards_branch() {
        let mut history = played(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
        ]);
        history.jump_to(1).unwrap();
        history.play(Position::BottomLeft).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(
            history.current().get(Position::BottomLeft),
            Square::Occupied(Player::O)
        );
        assert_eq!(history.current().get(Position::TopLeft), Square::Empty);
    }

    #[test]
    fn test_from_records_accepts_played_game() {
        let history = played(&[Position::Center, Position::TopLeft]);
        let rebuilt = History::from_records(history.records().to_vec(), 1).unwrap();
        assert_eq!(rebuilt.cursor(), 1);
        assert_eq!(rebuilt.records(), history.records());
    }

    #[test]
    fn test_from_records_rejects_missing_move() {
        let history = played(&[Position::Center]);
        let mut records = history.records().to_vec();
        records[1] = MoveRecord::new(*records[1].board(), None);
        assert!(matches!(
            History::from_records(records, 0),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_from_records_rejects_move_at_start() {
        let records = vec![MoveRecord::new(
            Board::new(),
            Some(Move::new(Player::X, Position::Center)),
        )];
        assert!(History::from_records(records, 0).is_err());
    }

    #[test]
    fn test_from_records_rejects_bad_cursor_and_empty() {
        assert!(History::from_records(vec![MoveRecord::initial()], 1).is_err());
        assert!(History::from_records(Vec::new(), 0).is_err());
    }
}
