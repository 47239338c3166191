//! Tic-tac-toe rules, history and session.

pub mod action;
pub mod history;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod types;

pub use action::{Move, MoveError, apply_move};
pub use history::{History, HistoryError};
pub use position::Position;
pub use session::{GameEvent, GameListener, GameSession, PlayOutcome};
pub use snapshot::{HistoryEntry, Snapshot, Status};
pub use types::{Board, Player, Square};
