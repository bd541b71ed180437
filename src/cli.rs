//! Command-line interface for crossings.

use clap::{Parser, Subcommand};

/// Crossings - race your tokens across the board
#[derive(Parser, Debug)]
#[command(name = "crossings")]
#[command(about = "Two-player race-and-jump game with a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the computer against itself and report the result
    Selfplay {
        /// Stop after this many plies even without a winner
        #[arg(long, default_value = "200")]
        max_plies: u32,
    },

    /// Print the legal moves of the starting position as JSON
    Legal,
}
