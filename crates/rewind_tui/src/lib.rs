//! Rewind terminal UI library.
//!
//! The presentation shell around [`rewind_tictactoe`]: it renders the
//! board, status line, sort toggle and move list with ratatui, and turns
//! key presses and mouse clicks into history transitions.
//!
//! # Architecture
//!
//! - **App**: session state (history, list order, focus) and input handling
//! - **UI**: stateless rendering plus the hit-test layout for clicks
//! - **Replay**: headless play-through for scripts
//! - **Config / CLI / logging**: settings file, arguments, tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod ui;

pub use app::{Action, App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use input::{digit_position, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{IgnoredMove, ReplayReport, replay};
pub use ui::{ScreenLayout, Target, draw};
