//! Terminal UI for tic-tac-toe.

pub mod app;
pub mod input;
pub mod sound;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::Settings;
use crate::games::tictactoe::GameSession;
pub use app::App;
use sound::TerminalBell;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    let mut session = GameSession::new();
    if *settings.sound().enabled() {
        session.subscribe(Box::new(TerminalBell::stdout(*settings.sound())));
    }
    let mut app = App::new(session);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw-then-wait loop: one frame per input event.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let mut hit_map = None;
        terminal.draw(|f| hit_map = Some(ui::draw(f, app)))?;
        if let Some(hit_map) = hit_map {
            app.set_hit_map(hit_map);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code)?,
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row)?
            }
            _ => {}
        }
    }
    Ok(())
}
