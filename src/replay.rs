//! Headless replay of a move script.

use crate::games::tictactoe::{GameSession, PlayOutcome, Position, Snapshot};
use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

/// Plays `moves` on a fresh session, optionally jumps, and returns the
/// resulting snapshot.
///
/// Each move is a cell index (0-8) or a cell label such as `"Center"`.
/// Moves the rules reject are logged and skipped.
///
/// # Errors
///
/// Fails on a move that names no cell, or when `jump` is past the end of
/// the history.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[String], jump: Option<usize>) -> Result<Snapshot> {
    let mut session = GameSession::new();
    for raw in moves {
        let position = Position::from_label_or_number(raw)
            .with_context(|| format!("Invalid cell '{}' (expected 0-8 or a cell label)", raw))?;
        if let PlayOutcome::Ignored(reason) = session.play(position) {
            warn!(%position, %reason, "Move ignored");
        }
    }

    if let Some(index) = jump {
        session.jump_to(index)?;
    }

    let snapshot = session.snapshot();
    info!(current = snapshot.current(), "Replay finished");
    Ok(snapshot)
}
