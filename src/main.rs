//! Tic-tac-toe - terminal game and headless replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use tictactoe_timeline::{Settings, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui => run_tui(&cli.config),
        Command::Replay { moves, jump, json } => run_replay(&cli.config, &moves, jump, json),
    }
}

/// Run the terminal UI, logging to a file to avoid interfering with it
fn run_tui(config: &Path) -> Result<()> {
    // Settings name the log file, so they load before the subscriber exists.
    let settings = Settings::from_file(config)?;
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    info!(config = %config.display(), ?settings, "Settings loaded");

    tui::run_tui(&settings)
}

/// Apply a move script and print the resulting snapshot
fn run_replay(config: &Path, moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let settings = Settings::from_file(config)?;
    info!(?settings, "Settings loaded");

    let snapshot = replay(moves, jump)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", snapshot.to_text());
    }
    Ok(())
}
