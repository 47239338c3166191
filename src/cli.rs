//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history navigation
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse and keyboard)
    Tui,

    /// Apply a move script without a UI and print the result
    Replay {
        /// Comma-separated cell indices 0-8, or cell labels
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        moves: Vec<String>,

        /// History entry to display after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// Print the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
