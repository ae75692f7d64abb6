//! Command-line interface for tictactoe_replay.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_session::DisplayOrder;

/// Tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Tic-tac-toe with time-travel history and a winner log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe_replay.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Run a scripted session and print the result
    Replay {
        /// Steps: a cell (0-8 or a label such as "center"), jump:N, order, clear
        #[arg(required = true, value_delimiter = ',')]
        steps: Vec<String>,

        /// Initial move list order (overrides the config file)
        #[arg(long)]
        order: Option<DisplayOrder>,

        /// Print the final session as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}
