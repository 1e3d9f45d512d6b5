//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history storage so the move history and the
//! presentation layer can both consult them.

pub mod apply;
pub mod draw;
pub mod win;

pub use apply::apply_move;
pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner};
