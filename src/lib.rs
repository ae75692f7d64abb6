//! Front ends for a tic-tac-toe session with navigable history.
//!
//! The game logic lives in [`tictactoe_session`]. This crate drives it
//! two ways:
//!
//! - **TUI**: an interactive ratatui board with the move list beside it
//! - **Replay**: a headless script of steps, reported as text or JSON
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{parse_script, render_report, run_script};
//! use tictactoe_session::DisplayOrder;
//!
//! # fn main() -> anyhow::Result<()> {
//! let steps = parse_script(&["0", "3", "1", "4", "2"])?;
//! let outcome = run_script(&steps, DisplayOrder::Ascending)?;
//! assert!(render_report(&outcome).contains("Winner: X"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Scripted sessions
pub use replay::{
    IgnoredStep, ReplayError, ReplayOutcome, ScriptStep, StepParseError, parse_script,
    render_json, render_report, run_script,
};
