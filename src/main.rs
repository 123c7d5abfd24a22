//! Tic-Hac-Noe - console front end

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tic_hac_noe::{ConsolePresenter, GameConfig, LINES, OutputFormat, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, json } => run_play(config, json),
        Command::Lines => run_lines(),
    }
}

/// Play one console session on stdin/stdout.
#[instrument]
fn run_play(config_path: Option<std::path::PathBuf>, json: bool) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    info!(?format, "Starting console session");
    let presenter = ConsolePresenter::new(io::stdout(), format, config.clone());
    let mut session = Session::with_thread_rng(presenter);

    tic_hac_noe::run_console(&mut session, io::stdin().lock(), &config)
        .context("Console session failed")?;

    info!(score = %session.score(), "Session finished");
    Ok(())
}

/// Print every winning line in scan order.
fn run_lines() -> Result<()> {
    for (i, line) in LINES.iter().enumerate() {
        println!("{:>2}: {}", i, line);
    }
    Ok(())
}
