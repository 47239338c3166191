//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use crate::games::tictactoe::{GameSession, HistoryError, PlayOutcome, Position};
use crossterm::event::KeyCode;
use ratatui::layout::{Position as ScreenPosition, Rect};
use tracing::{debug, info, instrument};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

/// Screen areas from the last frame, used to resolve mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Rectangle of each board cell.
    pub cells: Vec<(Position, Rect)>,
    /// Rectangle of each visible move-list row, by history index.
    pub entries: Vec<(usize, Rect)>,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board cell.
    Cell(Position),
    /// A move-list entry.
    Entry(usize),
}

impl HitMap {
    /// Finds the element under terminal coordinates.
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(pos, _)| ClickTarget::Cell(*pos))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(_, rect)| rect.contains(point))
                    .map(|(index, _)| ClickTarget::Entry(*index))
            })
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates an application around `session`.
    pub fn new(session: GameSession) -> Self {
        let selected = session.current_move();
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Highlighted board cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores the clickable areas of the frame just drawn.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Propagates [`HistoryError`] if a jump targets a missing entry.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), HistoryError> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.selected = 0;
            }
            KeyCode::Char('g') => self.jump(0)?,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key)?,
            },
        }
        Ok(())
    }

    /// Handles a left click at terminal coordinates.
    ///
    /// # Errors
    ///
    /// Propagates [`HistoryError`] if a jump targets a missing entry.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) -> Result<(), HistoryError> {
        match self.hit_map.target_at(column, row) {
            Some(ClickTarget::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.play(pos);
            }
            Some(ClickTarget::Entry(index)) => {
                self.focus = Focus::History;
                self.jump(index)?;
            }
            None => debug!("Click outside interactive areas"),
        }
        Ok(())
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) -> Result<(), HistoryError> {
        let last = self.session.history().len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected)?,
            _ => {}
        }
        Ok(())
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.session.current_move();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn play(&mut self, pos: Position) {
        if let PlayOutcome::Played(_) = self.session.play(pos) {
            self.selected = self.session.current_move();
        }
    }

    fn jump(&mut self, index: usize) -> Result<(), HistoryError> {
        self.session.jump_to(index)?;
        self.selected = index;
        Ok(())
    }
}
