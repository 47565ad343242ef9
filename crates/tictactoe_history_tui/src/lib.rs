//! Terminal front end for `tictactoe_history`.
//!
//! # Architecture
//!
//! - **App**: UI-only state (cursor, focus, selection) around a boxed
//!   [`GameModel`](tictactoe_history::GameModel)
//! - **Input**: pure key-to-command mapping
//! - **UI**: stateless rendering of a [`GameView`](tictactoe_history::GameView)
//! - **Replay**: headless scripted games for the `replay` subcommand

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod terminal;
mod ui;
mod variant;

pub use app::App;
pub use cli::{Cli, Command as CliCommand};
pub use config::{AppConfig, ConfigError};
pub use input::{Command, Direction, Focus, map_key, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayRequest, render_json, render_text, run as run_replay};
pub use terminal::run_tui;
pub use ui::draw;
pub use variant::Variant;
