//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Mode;

/// Strictly Tic-Tac-Toe - play in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe against a friend or an automated opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Opponent type (overrides the config file)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Seed for the automated opponent (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to a TOML session config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// List available modes
    Modes,
}
