//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` wins, otherwise `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Logs to `path` so output does not interfere with the terminal UI.
pub fn init_file_logging(path: &Path, filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Logs to stderr, keeping stdout for command output.
pub fn init_stderr_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(std::io::stderr)
        .try_init();
}
