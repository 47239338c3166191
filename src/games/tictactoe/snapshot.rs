//! Per-frame view of a session for presentation layers.

use super::rules::{active_player, is_draw, winning_line};
use super::{Board, History, Player, Position, Square};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// Status line shown above the board.
///
/// A full board without a winner still reports the next player; hosts
/// that care about draws check [`Snapshot::is_draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// Someone has three in a row.
    #[display("winner: {_0}!")]
    Winner(Player),
    /// No winner yet.
    #[display("next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Status for `board`, reached after `move_index` moves.
    pub fn for_board(board: &Board, move_index: usize) -> Self {
        match winning_line(board) {
            Some((winner, _)) => Status::Winner(winner),
            None => Status::NextPlayer(active_player(move_index)),
        }
    }
}

/// One selectable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct HistoryEntry {
    /// Index into the history.
    index: usize,
    /// Human-readable label.
    label: String,
    /// Whether this entry is the one displayed.
    is_current: bool,
}

impl HistoryEntry {
    /// Label for the entry at `index`.
    pub fn label_for(index: usize) -> String {
        if index > 0 {
            format!("show move #{index}")
        } else {
            "go to game start".to_string()
        }
    }
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    /// Squares of the current board, row-major.
    squares: [Square; 9],
    /// Structured status.
    status: Status,
    /// Status as display text.
    status_text: String,
    /// Move list, oldest first.
    entries: Vec<HistoryEntry>,
    /// Index of the displayed entry.
    current: usize,
    /// Line to highlight when the current board is won.
    winning_line: Option<[Position; 3]>,
    /// Board is full and nobody won.
    is_draw: bool,
}

impl Snapshot {
    /// Builds the view of `history` at its cursor.
    pub fn from_history(history: &History) -> Self {
        let board = history.current_board();
        let current = history.current();
        let status = Status::for_board(board, current);
        let entries = (0..history.len())
            .map(|index| HistoryEntry::new(index, HistoryEntry::label_for(index), index == current))
            .collect();

        Self {
            squares: *board.squares(),
            status,
            status_text: status.to_string(),
            entries,
            current,
            winning_line: winning_line(board).map(|(_, line)| line),
            is_draw: is_draw(board),
        }
    }

    /// Square at `pos` on the displayed board.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Plain-text rendering: board, status and move list.
    pub fn to_text(&self) -> String {
        let mut out = Board::from_squares(self.squares).display();
        out.push_str("\n\n");
        out.push_str(&self.status_text);
        out.push('\n');
        for entry in &self.entries {
            let marker = if entry.is_current { ">" } else { " " };
            out.push_str(&format!("\n{marker} {}. {}", entry.index + 1, entry.label));
        }
        out
    }
}
