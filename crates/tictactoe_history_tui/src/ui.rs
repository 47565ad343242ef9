//! Stateless rendering of the game view.

use crate::app::App;
use crate::input::Focus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_history::{Board, GameView, Player, Position, Square, Status, WinnerInfo};

const CELL_WIDTH: u16 = 9;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 11;

const HELP: &str =
    "arrows move | enter play | 1-9 play cell | [ ] step | tab focus | s sort | v variant | q quit";

/// Renders the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Tic Tac Toe [{}]", app.variant()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
        .split(chunks[1]);

    draw_board_panel(frame, panels[0], app, &view);
    draw_history(frame, panels[1], app, &view);

    let status_style = match view.status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
}

fn draw_board_panel(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::Board;
    let block = panel_block(format!(" Board (step {}) ", view.step), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = focused.then_some(app.cursor());
    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
    draw_board(frame, board_area, &view.board, &view.winner, cursor);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    winner: &WinnerInfo,
    cursor: Option<Position>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let positions = [0, 1, 2].map(|column| Position::from_row_column(row, column));
        draw_row(frame, chunk, board, winner, cursor, positions);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    winner: &WinnerInfo,
    cursor: Option<Position>,
    positions: [Option<Position>; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (chunk, pos) in [cols[0], cols[2], cols[4]].into_iter().zip(positions) {
        if let Some(pos) = pos {
            draw_cell(frame, chunk, board, winner, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    winner: &WinnerInfo,
    cursor: Option<Position>,
    pos: Position,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winner.highlights(pos) {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center inside the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::History;
    let block = panel_block(format!(" History ({}) ", view.order), focused);

    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.to_string(), style)))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
