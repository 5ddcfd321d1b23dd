//! Interactive terminal session.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument, warn};

use crate::app::App;
use crate::config::Config;
use crate::input::intent_for;
use crate::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back in cooked mode on drop.
///
/// Held for the whole session so early returns and panics still leave the
/// user with a usable shell.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub fn run(config: Config) -> Result<()> {
    info!("Starting interactive session");

    let _guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;
    terminal.clear()?;

    let mut app = App::new(config);
    event_loop(&mut terminal, &mut app)?;

    info!("Session ended");
    Ok(())
}

/// Blocks on input; redraws after every event.
fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => {
                if let Some(intent) = intent_for(key, app.alert().is_some()) {
                    debug!(?intent, "Key mapped to intent");
                    app.handle(intent);
                }
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
    Ok(())
}
