//! Stateless UI rendering and pointer hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{MoveListEntry, Player, Position, Square};

use crate::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// A move list entry, by history index.
    Entry(usize),
    /// The sort order toggle.
    SortButton,
}

/// Screen regions for one frame.
///
/// Drawing and click handling share this so a click always maps to what
/// was on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    title: Rect,
    board_panel: Rect,
    board: Rect,
    cells: [Rect; 9],
    status: Rect,
    sort_button: Rect,
    moves: Rect,
    entries: Vec<(Rect, usize)>,
    /// Index of the first list entry on screen.
    scroll: usize,
    caption: Rect,
    help: Rect,
}

impl ScreenLayout {
    /// Computes the regions for `area` with the given list entries.
    ///
    /// The list scrolls so that entry `selected` is on screen.
    pub fn new(area: Rect, entries: &[MoveListEntry], selected: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Title
                Constraint::Min(BOARD_HEIGHT + 2), // Board and moves
                Constraint::Length(3),             // Status
                Constraint::Length(1),             // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
            .split(rows[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Sort button
                Constraint::Min(3),    // Move list
                Constraint::Length(1), // Caption
            ])
            .split(body[1]);

        let board_panel = body[0];
        let board = center_rect(inner(board_panel), BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let col = (pos.col() - 1) as u16;
            let row = (pos.row() - 1) as u16;
            Rect::new(
                board.x + col * (CELL_WIDTH + 1),
                board.y + row * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        let moves = info[1];
        let list_area = inner(moves);
        let visible = list_area.height as usize;
        let scroll = if visible == 0 {
            0
        } else {
            selected.saturating_sub(visible - 1)
        };
        let entries = entries
            .iter()
            .skip(scroll)
            .take(visible)
            .enumerate()
            .map(|(row, entry)| {
                (
                    Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1),
                    entry.move_number,
                )
            })
            .collect();

        Self {
            title: rows[0],
            board_panel,
            board,
            cells,
            status: rows[2],
            sort_button: info[0],
            moves,
            entries,
            scroll,
            caption: info[2],
            help: rows[3],
        }
    }

    /// Returns what lies under the given terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
        {
            return Some(Target::Cell(pos));
        }
        if let Some((_, move_number)) = self
            .entries
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
        {
            return Some(Target::Entry(*move_number));
        }
        if contains(self.sort_button, column, row) {
            return Some(Target::SortButton);
        }
        None
    }

    /// Area of a board cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Area of the sort toggle.
    pub fn sort_button(&self) -> Rect {
        self.sort_button
    }

    /// Areas of the visible list entries with their history index.
    pub fn entries(&self) -> &[(Rect, usize)] {
        &self.entries
    }

    /// Position in the move list of the first visible entry.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Whether a terminal cell lies inside the move list panel.
    pub fn in_move_list(&self, column: u16, row: u16) -> bool {
        contains(self.moves, column, row)
    }
}

/// Renders the whole screen and returns the layout used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let entries = app.entries();
    let layout = ScreenLayout::new(frame.area(), &entries, *app.selected());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app);
    draw_moves(frame, &layout, app, &entries);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    if *app.show_hints() {
        let help = Paragraph::new(
            "arrows move  enter/space select  1-9 play  tab switch  s sort  r restart  q quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(help, layout.help);
    }

    layout
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let focused = *app.focus() == Focus::Board;
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    frame.render_widget(block, layout.board_panel);

    let board = app.history().current();
    let status = app.history().status();
    let winning = status.winning_line();

    for pos in Position::ALL {
        let square = board.get(pos);
        let (symbol, base_style) = match square {
            Square::Empty if *app.show_hints() => (
                pos.cell_number().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Empty => (String::new(), Style::default()),
            Square::Occupied(Player::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let style = if winning.is_some_and(|line| line.contains(pos)) {
            base_style.bg(Color::Green)
        } else if focused && pos == *app.cursor() {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        let area = layout.cell(pos);
        let cell = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(symbol, style)),
            Line::from(""),
        ])
        .style(style)
        .alignment(Alignment::Center);
        frame.render_widget(cell, area);
    }

    draw_grid_lines(frame, layout.board);
}

fn draw_grid_lines(frame: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    let segment = "─".repeat(CELL_WIDTH as usize);
    let horizontal = format!("{segment}┼{segment}┼{segment}");

    for i in 1..3u16 {
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(board.x, y, BOARD_WIDTH, 1).intersection(board);
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(style), line);

        let x = board.x + i * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = board.y + row * (CELL_HEIGHT + 1);
            let column = Rect::new(x, y, 1, CELL_HEIGHT).intersection(board);
            frame.render_widget(
                Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize]).style(style),
                column,
            );
        }
    }
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, app: &App, entries: &[MoveListEntry]) {
    let button = Paragraph::new(app.order().toggle_label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, layout.sort_button);

    let focused = *app.focus() == Focus::MoveList;
    let block = Block::default()
        .title("Moves")
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    frame.render_widget(block, layout.moves);

    for (row, (area, _)) in layout.entries().iter().enumerate() {
        let i = layout.scroll() + row;
        let style = if focused && i == *app.selected() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let text = format!("{}. {}", i + 1, entries[i]);
        frame.render_widget(Paragraph::new(text).style(style), *area);
    }

    let caption = Paragraph::new(app.caption()).style(Style::default().fg(Color::Gray));
    frame.render_widget(caption, layout.caption);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
