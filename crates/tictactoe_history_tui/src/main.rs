//! tictactoe - play or replay tic-tac-toe with a navigable history.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_history_tui::{
    AppConfig, Cli, CliCommand, ReplayRequest, init_file_logging, init_stderr_logging,
    render_json, render_text, run_replay, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(CliCommand::Play {
        variant: None,
        order: None,
    });

    let (variant, order) = command.overrides();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?
        .with_overrides(variant, order);

    match command {
        CliCommand::Play { .. } => {
            init_file_logging(config.log_file(), config.log_filter())?;
            info!(config = ?config, "Configuration resolved");
            run_tui(&config)
        }
        CliCommand::Replay { moves, jump, json, .. } => {
            init_stderr_logging(config.log_filter());
            let request = ReplayRequest {
                variant: *config.variant(),
                order: *config.history_order(),
                moves,
                jump,
            };
            let view = run_replay(&request);
            if json {
                println!("{}", render_json(&view)?);
            } else {
                print!("{}", render_text(&view));
            }
            Ok(())
        }
    }
}
