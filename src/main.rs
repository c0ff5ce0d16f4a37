//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Plays a game on stdin/stdout against a friend or an automated opponent.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use console::Console;
use strictly_tictactoe::{GameSession, Mode, SessionConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, seed, config } => run_play(mode, seed, config),
        Command::Modes => {
            for mode in <Mode as strum::IntoEnumIterator>::iter() {
                println!("{:<20} {}", mode.to_string(), mode.name());
            }
            Ok(())
        }
    }
}

/// Run an interactive game
#[instrument]
fn run_play(
    mode: Option<Mode>,
    seed: Option<u64>,
    config: Option<std::path::PathBuf>,
) -> Result<()> {
    let settings = match config {
        Some(path) => SessionConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => SessionConfig::default(),
    }
    .with_overrides(mode, seed);

    info!(mode = %settings.mode(), seed = ?settings.seed(), "Starting game");

    let session = GameSession::from_config(&settings);
    let stdin = std::io::stdin();
    let mut console = Console::new(session, stdin.lock(), std::io::stdout());
    console.run()?;

    info!(status = ?console.session().status(), "Game closed");
    Ok(())
}
