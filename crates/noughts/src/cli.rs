//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a fork-aware computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Computer thinking delay in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the random fallback (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the computer's move for a board snapshot
    Suggest {
        /// Nine squares in row-major order: X, O, or . for empty
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Seed for the random fallback
        #[arg(long)]
        seed: Option<u64>,
    },
}
