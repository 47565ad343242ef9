//! Command-line interface for the tictactoe binary.

use crate::variant::Variant;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_history::{HistoryOrder, Position};

/// Tic-tac-toe with time travel through the move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional, defaults apply if missing)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Game architecture to use
        #[arg(long)]
        variant: Option<Variant>,

        /// Initial order of the move list (asc or desc)
        #[arg(long)]
        order: Option<HistoryOrder>,
    },

    /// Replay a list of moves and print the result
    Replay {
        /// Cells to play, 0-8 row-major, comma separated (e.g. 4,0,8)
        #[arg(long, value_delimiter = ',', value_parser = parse_cell)]
        moves: Vec<Position>,

        /// Step to jump to after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Game architecture to use
        #[arg(long)]
        variant: Option<Variant>,

        /// Order of the printed move list (asc or desc)
        #[arg(long)]
        order: Option<HistoryOrder>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Variant and order overrides carried by this command.
    pub fn overrides(&self) -> (Option<Variant>, Option<HistoryOrder>) {
        match self {
            Self::Play { variant, order } | Self::Replay { variant, order, .. } => {
                (*variant, *order)
            }
        }
    }
}

/// Parses a 0-based cell index.
fn parse_cell(s: &str) -> Result<Position, String> {
    let index: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a cell index", s))?;
    Position::try_from(index).map_err(|e| e.to_string())
}
