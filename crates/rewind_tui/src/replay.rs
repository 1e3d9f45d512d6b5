//! Headless replay of a move sequence.

use anyhow::{Context, Result, bail};
use rewind_tictactoe::{
    Board, GameStatus, History, MoveListEntry, Position, SortOrder, move_list, position_caption,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A move from the input that the game ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredMove {
    /// The input as given.
    pub input: String,
    /// Why it was ignored.
    pub reason: String,
}

/// Result of a replay: the displayed position and its move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// History index on display.
    pub cursor: usize,
    /// Number of history entries.
    pub history_len: usize,
    /// Board on display.
    pub board: Board,
    /// Status of the displayed board.
    pub status: GameStatus,
    /// Status line text.
    pub status_line: String,
    /// Caption text.
    pub caption: String,
    /// The move list in the requested order.
    pub entries: Vec<MoveListEntry>,
    /// Moves rejected during the replay.
    pub ignored: Vec<IgnoredMove>,
}

/// Plays `moves` from an empty board, then optionally jumps.
///
/// Moves into occupied squares or after a win are skipped, as in the
/// UI. Inputs that name no square, or a jump past the end, are errors.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[String], jump: Option<usize>, order: SortOrder) -> Result<ReplayReport> {
    let mut history = History::new();
    let mut ignored = Vec::new();

    for input in moves {
        let Some(pos) = Position::from_label_or_number(input) else {
            bail!("Not a square: {input:?} (use 1-9 or a label like \"center\")");
        };
        match history.play(pos) {
            Ok(_) => debug!(%pos, "Replayed move"),
            Err(e) if e.is_ignorable() => {
                debug!(%pos, error = %e, "Ignored move");
                ignored.push(IgnoredMove {
                    input: input.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e).context(format!("Replaying {input:?}")),
        }
    }

    if let Some(k) = jump {
        history.jump_to(k).context("Jump failed")?;
    }

    info!(
        history_len = history.len(),
        cursor = history.cursor(),
        ignored = ignored.len(),
        "Replay finished"
    );

    let status = history.status();
    Ok(ReplayReport {
        cursor: history.cursor(),
        history_len: history.len(),
        board: *history.current(),
        status,
        status_line: status.to_string(),
        caption: position_caption(&history),
        entries: move_list(&history, order),
        ignored,
    })
}

impl ReplayReport {
    /// Plain-text rendering for the terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.board.display());
        out.push_str("\n\n");
        out.push_str(&self.status_line);
        out.push('\n');
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, entry.description()));
        }
        out.push_str(&self.caption);
        out.push('\n');
        for ignored in &self.ignored {
            out.push_str(&format!("ignored {}: {}\n", ignored.input, ignored.reason));
        }
        out
    }
}
