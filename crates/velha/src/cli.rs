//! Command-line interface for velha.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use velha_engine::Board;

/// Velha - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "velha")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./velha.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Do not pop up an alert when the game ends
        #[arg(long)]
        no_alert: bool,
    },

    /// Replay cell indices (0-8) from a new game and print the result
    Replay {
        /// Cell indices in play order
        moves: Vec<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a board such as "XOX/XOO/OXX" ('.', '_' or '-' for empty)
    Eval {
        /// Board cells in row-major order
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, falling back to `play`.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { no_alert: false })
    }
}
