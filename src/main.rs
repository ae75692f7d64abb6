//! tictactoe_replay - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_replay::{
    AppConfig, Cli, Command, parse_script, render_json, render_report, run_script, tui,
};
use tictactoe_session::DisplayOrder;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = AppConfig::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Tui => tui::run_tui(&config),
        Command::Replay { steps, order, json } => run_replay(&config, &steps, order, json),
    }
}

/// Run a scripted session and print the result to stdout.
#[instrument(skip(config, steps))]
fn run_replay(
    config: &AppConfig,
    steps: &[String],
    order: Option<DisplayOrder>,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match order {
        Some(order) => config.clone().with_display_order(order),
        None => config.clone(),
    };
    info!(steps = steps.len(), order = %config.display_order(), "Starting replay");

    let script = parse_script(steps)?;
    let outcome = run_script(&script, *config.display_order())?;

    if json {
        let report = render_json(&outcome).context("Failed to serialize replay")?;
        println!("{}", report);
    } else {
        print!("{}", render_report(&outcome));
    }
    Ok(())
}
