//! Velha - two-player tic-tac-toe in the terminal.
//!
//! A thin shell around [`velha_engine`]: it turns key presses into engine
//! actions, renders the resulting state with ratatui, and offers headless
//! `replay`/`eval` commands over the same engine.
//!
//! # Architecture
//!
//! - **App**: owns the single game state and the view state around it
//! - **Input**: key events to intents
//! - **UI**: stateless rendering of an [`App`]
//! - **Play**: terminal setup and the blocking event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod headless;
mod input;
pub mod logging;
mod play;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use headless::{EvalReport, RejectedMove, ReplayReport, eval, replay};
pub use input::{Direction, Intent, intent_for, move_cursor};
pub use play::run;
