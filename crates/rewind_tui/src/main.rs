//! Rewind - tic-tac-toe with a navigable move history.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::SortOrder;
use rewind_tui::{App, Cli, Command, Settings, draw, init_file_logging, init_stderr_logging};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            descending,
            log_file,
        } => run_tui(settings.with_overrides(descending, log_file)),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => run_replay(settings, moves, jump, descending, json),
    }
}

/// Run the interactive terminal UI.
fn run_tui(settings: Settings) -> Result<()> {
    init_file_logging(settings.log_file())?;
    info!(log_file = %settings.log_file().display(), "Starting Rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(&settings));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one input event, apply it; repeat until quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut layout = None;
        terminal.draw(|f| layout = Some(draw(f, &app)))?;
        let layout = layout.context("Frame was not drawn")?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
            _ => {}
        }

        if *app.should_quit() {
            return Ok(());
        }
    }
}

/// Replay moves headlessly and print the result.
#[instrument(skip(settings, moves))]
fn run_replay(
    settings: Settings,
    moves: Vec<String>,
    jump: Option<usize>,
    descending: bool,
    json: bool,
) -> Result<()> {
    init_stderr_logging();

    let order = if descending {
        SortOrder::Descending
    } else {
        *settings.sort_order()
    };

    let report = rewind_tui::replay(&moves, jump, order)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
