//! Terminal UI for the game session.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{Direction, Intent, interpret, move_cursor};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::ops::ControlFlow;
use tracing::{debug, error, info, instrument};

/// Runs the interactive terminal UI until the user quits.
///
/// Logging goes to [`AppConfig::log_file`] so it does not interfere with
/// the screen.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(order = %config.display_order(), "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        disable_raw_mode()
    })?;

    let mut app = App::new(*config.display_order());
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    }
    info!(
        moves = app.session().history().len() - 1,
        winners = %app.session().winner_log(),
        "TUI closed"
    );
    result
}

/// Runs `setup`; on failure runs `restore` before returning the setup error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    setup().or_else(|e| {
        error!(error = %e, "Failed to set up terminal");
        restore().context("Failed to restore terminal")?;
        Err(e)
    })
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            let intent = interpret(key);
            debug!(?key, ?intent, "Key pressed");
            if let ControlFlow::Break(()) = app.handle(intent) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no alternate screen")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(
            result.unwrap_err().to_string(),
            "no alternate screen"
        );
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result.expect("setup succeeds"), 7);
        assert!(!restored.get());
    }
}
