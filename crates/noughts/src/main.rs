//! Noughts - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{GameConfig, run_play, suggest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            delay_ms,
            seed,
        } => {
            let mut config = GameConfig::load(config.as_deref())?;
            if let Some(delay_ms) = delay_ms {
                config = config.with_computer_delay_ms(delay_ms);
            }
            if seed.is_some() {
                config = config.with_seed(seed);
            }
            run_play(config).await
        }
        Command::Suggest { board, json, seed } => {
            println!("{}", suggest(&board, seed, json)?);
            Ok(())
        }
    }
}
