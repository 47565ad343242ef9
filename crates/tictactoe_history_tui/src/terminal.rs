//! Terminal setup and the interactive event loop.

use crate::app::App;
use crate::config::AppConfig;
use crate::input::map_key;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the interactive game until the user quits.
#[instrument(skip(config), fields(variant = %config.variant()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.variant(), *config.history_order());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, wait for a key, apply it; until the app asks to quit.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Windows reports both press and release.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(command) = map_key(key.code, app.focus()) {
                debug!(?command, "Key mapped");
                app.handle(command);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
