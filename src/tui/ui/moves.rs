//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::games::tictactoe::Snapshot;

/// Renders the move list and returns the area of each visible entry.
///
/// The displayed entry is marked with `>`; `selected` is highlighted
/// when the list has keyboard focus.
pub fn render_moves(
    f: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    selected: usize,
    focused: bool,
) -> Vec<(usize, Rect)> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Moves");
    let inner = block.inner(area);

    let items: Vec<ListItem> = snapshot
        .entries()
        .iter()
        .map(|entry| {
            let marker = if *entry.is_current() { ">" } else { " " };
            let mut style = Style::default();
            if *entry.is_current() {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            if focused && *entry.index() == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{marker} {}. {}", entry.index() + 1, entry.label())).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);

    snapshot
        .entries()
        .iter()
        .take(inner.height as usize)
        .enumerate()
        .map(|(row, entry)| {
            let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            (*entry.index(), rect)
        })
        .collect()
}
