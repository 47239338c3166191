//! Board history with a movable cursor.
//!
//! The history keeps one board per move, starting with the empty board.
//! The cursor selects which entry is shown and played from. Playing from
//! an earlier entry discards every entry after it before appending, so
//! only one line of play ever survives.

use super::action::{Move, MoveError, apply_move};
use super::rules::active_player;
use super::{Board, Player, Position};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Errors raised by history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested entry does not exist.
    #[display("History entry {} is out of range (history has {} entries)", target, len)]
    OutOfRange {
        /// Requested index.
        target: usize,
        /// Number of entries at the time of the request.
        len: usize,
    },
}

/// Ordered boards plus the index of the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
    current: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current: 0,
        }
    }

    /// Board at the cursor.
    pub fn current_board(&self) -> &Board {
        // `current < boards.len()` holds for every reachable state.
        &self.boards[self.current]
    }

    /// Index of the entry at the cursor.
    pub fn current(&self) -> usize {
        self.current
    }

    /// All boards, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of entries, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Player whose turn it is at the cursor.
    pub fn to_move(&self) -> Player {
        active_player(self.current)
    }

    /// Plays `position` for the player to move, from the cursor.
    ///
    /// On success every entry after the cursor is dropped, the new board is
    /// appended and the cursor moves onto it. On rejection nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] that rejected the move.
    #[instrument(skip(self), fields(current = self.current, len = self.boards.len()))]
    pub fn play(&mut self, position: Position) -> Result<Move, MoveError> {
        let action = Move::new(self.to_move(), position);
        let next = apply_move(self.current_board(), action)?;

        let discarded = self.boards.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding later history entries");
        }
        self.boards.truncate(self.current + 1);
        self.boards.push(next);
        self.current = self.boards.len() - 1;
        Ok(action)
    }

    /// Moves the cursor to `target` without altering the entries.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] when `target` is not an entry.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), HistoryError> {
        if target >= self.boards.len() {
            return Err(HistoryError::OutOfRange {
                target,
                len: self.boards.len(),
            });
        }
        self.current = target;
        Ok(())
    }

    /// Restores the single empty-board entry.
    pub fn reset(&mut self) {
        self.boards.clear();
        self.boards.push(Board::new());
        self.current = 0;
    }

    #[cfg(test)]
    pub(crate) fn from_parts(boards: Vec<Board>, current: usize) -> Self {
        Self { boards, current }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
