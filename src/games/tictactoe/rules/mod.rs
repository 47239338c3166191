//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage and from the history so they can be reused by the session,
//! the invariants and the renderer alike.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::active_player;
pub use win::{LINES, check_winner, winning_line};
