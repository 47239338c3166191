//! Tic-tac-toe with move history navigation.
//!
//! The core is a small state machine: a [`GameSession`] owns the list of
//! boards played so far and a cursor into it. Playing a square from an
//! earlier entry discards the entries after it; jumping only moves the
//! cursor.
//!
//! # Architecture
//!
//! - **Games**: board types, rules, history and the session
//! - **Config**: TOML settings for sound cues and logging
//! - **TUI**: ratatui front end with mouse and keyboard input
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameSession, Position};
//!
//! let mut session = GameSession::new();
//! session.play(Position::Center);
//! session.play(Position::TopLeft);
//! session.play(Position::BottomRight);
//! assert_eq!(session.snapshot().status_text(), "next player: O");
//!
//! session.jump_to(1).unwrap();
//! session.play(Position::TopRight);
//! assert_eq!(session.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings, SoundCue, SoundSettings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants::{
    CursorInBoundsInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    NoMoveAfterWinInvariant, OneMarkPerMoveInvariant, StartsEmptyInvariant,
};
pub use games::tictactoe::rules::{
    LINES, active_player, check_winner, is_draw, is_full, winning_line,
};
pub use games::tictactoe::{
    Board, GameEvent, GameListener, GameSession, History, HistoryEntry, HistoryError, Move,
    MoveError, PlayOutcome, Player, Position, Snapshot, Square, Status, apply_move,
};

// Crate-level exports - Headless replay
pub use replay::replay;
