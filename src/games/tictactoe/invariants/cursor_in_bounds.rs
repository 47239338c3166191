//! Cursor-in-bounds invariant: the current entry exists.

use super::super::History;
use super::Invariant;

/// Invariant: `current < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.current() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing history entry"
    }
}
