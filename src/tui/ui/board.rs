//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{Player, Position, Snapshot, Square};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board and returns the area of each cell.
///
/// `cursor` is highlighted when the board has keyboard focus.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Option<Position>,
) -> Vec<(Position, Rect)> {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = Vec::with_capacity(9);
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        cells.extend(render_row(f, row_area, snapshot, cursor, row));
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    cells
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Option<Position>,
    row: usize,
) -> Vec<(Position, Rect)> {
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

    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);

    [cols[0], cols[2], cols[4]]
        .into_iter()
        .enumerate()
        .filter_map(|(col, cell_area)| {
            let pos = Position::from_row_col(row, col)?;
            render_square(f, cell_area, snapshot, cursor, pos);
            Some((pos, cell_area))
        })
        .collect()
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Option<Position>,
    pos: Position,
) {
    let square = snapshot.square(pos);
    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Square::Occupied(Player::O) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    };

    let on_winning_line = snapshot
        .winning_line()
        .is_some_and(|line| line.contains(&pos));
    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else if on_winning_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let lines = vec![Line::from(""), Line::from(square.symbol()), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
