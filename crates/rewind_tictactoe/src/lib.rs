//! Rewind tic-tac-toe - pure game logic with a navigable move history.
//!
//! # Architecture
//!
//! - **Rules**: win detection, draw detection and move application over a
//!   single board snapshot
//! - **History**: board snapshots with a cursor; playing from an earlier
//!   snapshot discards the forward branch
//! - **Move list**: the orderable list of jumps shown beside the board
//! - **Invariants / contracts**: properties every reachable history keeps
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{History, Position, SortOrder, move_list};
//!
//! let mut history = History::new();
//! history.play(Position::Center)?;
//! history.play(Position::TopLeft)?;
//! history.jump_to(1)?;
//! history.play(Position::BottomRight)?;
//!
//! assert_eq!(history.len(), 3);
//! assert_eq!(move_list(&history, SortOrder::Ascending).len(), 2);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
mod move_list;
mod position;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, PlayContract, SquareIsEmpty};
pub use history::{History, MoveRecord};
pub use move_list::{MoveListEntry, SortOrder, move_list, position_caption};
pub use position::{GRID_SIZE, Position};
pub use rules::{WinningLine, apply_move, check_winner, is_draw, is_full};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
