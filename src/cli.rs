//! Command-line interface for tic-hac-noe.

use clap::{Parser, Subcommand};

/// Tic-Hac-Noe - 6x6 tic-tac-toe, two tokens per turn, six in a line wins
#[derive(Parser, Debug)]
#[command(name = "tic-hac-noe")]
#[command(about = "Play Tic-Hac-Noe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game on the console
    Play {
        /// Path to a TOML config file (player names, board echo)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Print session events as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the winning lines in the order they are checked
    Lines,
}
