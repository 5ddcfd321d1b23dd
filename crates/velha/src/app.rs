//! Application state and logic.

use crate::config::Config;
use crate::input::{Intent, move_cursor};
use tracing::{debug, info, instrument};
use velha_engine::{Action, GameState, Outcome, Position, reduce};

/// Main application state.
///
/// Owns the one [`GameState`] of the session. Every change to it goes
/// through [`reduce`]; the rest is view state.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    alert: Option<Outcome>,
    should_quit: bool,
    config: Config,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: Config) -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            alert: None,
            should_quit: false,
            config,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The outcome awaiting acknowledgement, if an alert is up.
    pub fn alert(&self) -> Option<Outcome> {
        self.alert
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the shell configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Status line: the player to move, or the result.
    pub fn status_line(&self) -> String {
        match self.state.outcome() {
            Outcome::InProgress => format!("Current player: {}", self.state.current_player()),
            Outcome::Win(player) => format!("Winner: {}", player),
            Outcome::Draw => "Winner: Draw!".to_string(),
        }
    }

    /// Message shown in the end-of-game alert.
    pub fn alert_message(outcome: Outcome) -> String {
        match outcome {
            Outcome::Win(player) => format!("Player {} wins!", player),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress => String::new(),
        }
    }

    /// Handles a user intent.
    ///
    /// While an alert is up only dismiss, reset and quit get through.
    #[instrument(skip(self), fields(alert = ?self.alert))]
    pub fn handle(&mut self, intent: Intent) {
        if self.alert.is_some()
            && !matches!(intent, Intent::Dismiss | Intent::Reset | Intent::Quit)
        {
            debug!("Ignoring input while alert is open");
            return;
        }

        match intent {
            Intent::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Intent::PlaceAtCursor => self.select(self.cursor),
            Intent::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Intent::Reset => self.restart(),
            Intent::Dismiss => self.alert = None,
            Intent::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn select(&mut self, pos: Position) {
        let before = self.state;
        self.state = reduce(&before, Action::Select(pos.to_index()));
        if self.state == before {
            debug!(position = %pos, "Move had no effect");
            return;
        }

        let outcome = self.state.outcome();
        if outcome.is_terminal() {
            info!(%outcome, winner = ?outcome.winner(), "Game over");
            if *self.config.show_alert() {
                self.alert = Some(outcome);
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.state = reduce(&self.state, Action::Reset);
        self.cursor = Position::Center;
        self.alert = None;
    }
}
