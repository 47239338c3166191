//! Terminal bell sound cues.

use crate::config::{SoundCue, SoundSettings};
use crate::games::tictactoe::{GameEvent, GameListener};
use std::io::Write;
use tracing::{trace, warn};

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell on session events.
///
/// Writes are fire-and-forget: a failed write is logged and dropped.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
    settings: SoundSettings,
}

impl TerminalBell<std::io::Stdout> {
    /// Bell on standard output.
    pub fn stdout(settings: SoundSettings) -> Self {
        Self::new(std::io::stdout(), settings)
    }
}

impl<W: Write> TerminalBell<W> {
    /// Bell writing to `out`.
    pub fn new(out: W, settings: SoundSettings) -> Self {
        Self { out, settings }
    }

    /// Consumes the bell, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn cue_for(&self, event: &GameEvent) -> SoundCue {
        match event {
            GameEvent::MovePlayed { .. } => *self.settings.cell_cue(),
            GameEvent::HistoryEntryClicked { .. } => *self.settings.history_cue(),
        }
    }

    fn ring(&mut self) -> std::io::Result<()> {
        self.out.write_all(BEL)?;
        self.out.flush()
    }
}

impl<W: Write> GameListener for TerminalBell<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if !*self.settings.enabled() || self.cue_for(event).is_muted() {
            return;
        }
        trace!(?event, "Ringing bell");
        if let Err(e) = self.ring() {
            warn!(error = %e, "Failed to play sound cue");
        }
    }
}
