//! Game session: the single owner of history and cursor.
//!
//! [`GameSession::play`] and [`GameSession::jump_to`] are the only
//! mutators. Listeners are told about accepted moves and history jumps
//! after the transition has completed, so a slow or failing listener can
//! never reorder or block game state.

use super::action::{Move, MoveError};
use super::history::{History, HistoryError};
use super::invariants::assert_invariants;
use super::snapshot::Snapshot;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// Notification emitted by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was accepted and appended.
    MovePlayed {
        /// The move that was played.
        mv: Move,
        /// 1-based move number, equal to the new history index.
        move_number: usize,
    },
    /// A history entry was selected.
    HistoryEntryClicked {
        /// The entry now displayed.
        index: usize,
    },
}

/// Receiver for session notifications (sound cues, logging, tests).
///
/// Implementations must return promptly.
pub trait GameListener {
    /// Called once per event, after the state change.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// What happened to a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The move was applied.
    Played(Move),
    /// The move was silently ignored.
    Ignored(MoveError),
}

impl PlayOutcome {
    /// Returns true if the move was applied.
    pub fn is_played(&self) -> bool {
        matches!(self, PlayOutcome::Played(_))
    }
}

/// A tic-tac-toe game with navigable history.
#[derive(Default)]
pub struct GameSession {
    history: History,
    listeners: Vec<Box<dyn GameListener>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a session at the game start.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game session");
        Self::default()
    }

    /// Registers a listener for future events.
    pub fn subscribe(&mut self, listener: Box<dyn GameListener>) {
        self.listeners.push(listener);
    }

    /// Plays `position` for the player to move.
    ///
    /// Occupied squares and moves after a win are ignored: the session
    /// is left untouched and no event is emitted.
    #[instrument(skip(self), fields(current = self.history.current()))]
    pub fn play(&mut self, position: Position) -> PlayOutcome {
        match self.history.play(position) {
            Ok(mv) => {
                assert_invariants(&self.history);
                let move_number = self.history.current();
                debug!(%mv, move_number, "Move played");
                self.notify(GameEvent::MovePlayed { mv, move_number });
                PlayOutcome::Played(mv)
            }
            Err(reason) => {
                debug!(%reason, "Move ignored");
                PlayOutcome::Ignored(reason)
            }
        }
    }

    /// Displays history entry `index`; later entries are kept until the
    /// next play.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] for an index past the end.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)?;
        debug!(index, "Jumped to history entry");
        self.notify(GameEvent::HistoryEntryClicked { index });
        Ok(())
    }

    /// Starts over with an empty board, keeping listeners.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.history.reset();
    }

    /// The underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    /// Index of the displayed entry.
    pub fn current_move(&self) -> usize {
        self.history.current()
    }

    /// Player to move on the displayed board.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Current render view.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_history(&self.history)
    }

    fn notify(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}
