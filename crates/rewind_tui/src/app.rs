//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use rewind_tictactoe::{History, MoveListEntry, Position, SortOrder, move_list, position_caption};
use tracing::{debug, info, instrument, warn};

use crate::config::Settings;
use crate::input::{digit_position, move_cursor};
use crate::ui::{ScreenLayout, Target};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The list of past moves.
    MoveList,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// A state transition requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current player's mark.
    Play(Position),
    /// Move the history cursor to an entry.
    Jump(usize),
    /// Reverse the move list.
    ToggleOrder,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Main application state: one game session.
#[derive(Debug, Getters)]
pub struct App {
    /// Moves played this session and the displayed snapshot.
    history: History,
    /// Order of the move list.
    order: SortOrder,
    /// Keyboard cursor on the board.
    cursor: Position,
    /// Highlighted row of the displayed move list.
    selected: usize,
    /// Panel receiving arrow keys.
    focus: Focus,
    /// Whether empty cells show their numbers and the key help is drawn.
    show_hints: bool,
    /// Set once the user asks to leave.
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            history: History::new(),
            order: *settings.sort_order(),
            cursor: Position::Center,
            selected: 0,
            focus: Focus::Board,
            show_hints: *settings.show_hints(),
            should_quit: false,
        }
    }

    /// The move list as currently displayed.
    pub fn entries(&self) -> Vec<MoveListEntry> {
        move_list(&self.history, self.order)
    }

    /// Status line for the displayed snapshot.
    pub fn status_line(&self) -> String {
        self.history.status().to_string()
    }

    /// Caption under the move list.
    pub fn caption(&self) -> String {
        position_caption(&self.history)
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(pos) => self.play(pos),
            Action::Jump(move_number) => self.jump(move_number),
            Action::ToggleOrder => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "Toggled move list order");
            }
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        self.clamp_selection();
    }

    /// Translates a key press into an action and applies it.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match (key.code, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
            (KeyCode::Char('r'), _) => Some(Action::Restart),
            (KeyCode::Char('s'), _) => Some(Action::ToggleOrder),
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.focus = self.focus.toggle();
                None
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Action::Play(self.cursor)),
            (KeyCode::Enter | KeyCode::Char(' '), Focus::MoveList) => self
                .entries()
                .get(self.selected)
                .map(|entry| Action::Jump(entry.move_number)),
            (code @ KeyCode::Char(_), _) => digit_position(code).map(Action::Play),
            (code, Focus::Board) => {
                self.cursor = move_cursor(self.cursor, code);
                None
            }
            (KeyCode::Up, Focus::MoveList) => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            (KeyCode::Down, Focus::MoveList) => {
                self.selected += 1;
                self.clamp_selection();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            self.apply(action);
        }
    }

    /// Handles a mouse event against the layout of the last frame.
    ///
    /// A left-button press activates what it lands on; the wheel over the
    /// move list moves the selection.
    #[instrument(skip(self, layout))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
                if layout.in_move_list(mouse.column, mouse.row) =>
            {
                self.focus = Focus::MoveList;
                self.selected = match mouse.kind {
                    MouseEventKind::ScrollUp => self.selected.saturating_sub(1),
                    _ => self.selected + 1,
                };
                self.clamp_selection();
                return;
            }
            _ => return,
        }

        let action = match layout.hit(mouse.column, mouse.row) {
            Some(Target::Cell(pos)) => {
                self.cursor = pos;
                self.focus = Focus::Board;
                Some(Action::Play(pos))
            }
            Some(Target::Entry(move_number)) => {
                self.focus = Focus::MoveList;
                Some(Action::Jump(move_number))
            }
            Some(Target::SortButton) => Some(Action::ToggleOrder),
            None => None,
        };

        if let Some(action) = action {
            self.apply(action);
        }
    }

    fn play(&mut self, pos: Position) {
        match self.history.play(pos) {
            Ok(record) => {
                debug!(placed = ?record.placed(), "Move applied to UI state");
                self.selected = 0;
            }
            Err(e) if e.is_ignorable() => {
                debug!(error = %e, %pos, "Ignoring click");
            }
            Err(e) => {
                warn!(error = %e, %pos, "Move failed");
            }
        }
    }

    fn jump(&mut self, move_number: usize) {
        if let Err(e) = self.history.jump_to(move_number) {
            warn!(error = %e, "Jump failed");
        }
    }

    /// Restarts the game.
    fn restart(&mut self) {
        info!("Restarting game");
        self.history = History::new();
        self.cursor = Position::Center;
        self.selected = 0;
        self.focus = Focus::Board;
    }

    fn clamp_selection(&mut self) {
        let len = self.entries().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
