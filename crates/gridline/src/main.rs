//! Gridline - terminal line game
//!
//! Players take turns on an N-by-N grid; a full row, column or diagonal wins.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gridline::{Cli, Settings, run_tui};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let settings = Settings::resolve(&cli).context("Invalid settings")?;
    info!(?settings, "Launching");
    run_tui(settings)
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")
}
