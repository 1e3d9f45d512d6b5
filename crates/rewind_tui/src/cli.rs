//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - hot-seat tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "rewind.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the move list newest-first
        #[arg(long)]
        descending: bool,

        /// Log file (overrides the settings file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Replay moves without a UI and print the resulting position
    Replay {
        /// Cells to play in order: numbers 1-9 as printed on the board, or
        /// labels such as `center`
        moves: Vec<String>,

        /// Jump to this history entry after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest-first
        #[arg(long)]
        descending: bool,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            descending: false,
            log_file: None,
        }
    }
}
