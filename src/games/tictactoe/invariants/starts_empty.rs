//! Starts-empty invariant: entry 0 is the empty board.

use super::super::{Board, History};
use super::Invariant;

/// Invariant: the first history entry is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.boards().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
