//! Crossings - command-line driver.
//!
//! A thin shell over the library: engine self-play and legal-move
//! inspection. There is no interactive front end here; the session API is
//! the boundary a UI would sit on.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use crossings::{Move, Ply, Position, Session, legal_moves};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Selfplay { max_plies } => run_selfplay(max_plies),
        Command::Legal => run_legal(),
    }
}

/// Plays the engine against itself until one side wins.
fn run_selfplay(max_plies: u32) -> Result<()> {
    let mut session = Session::new();
    let mut plies = 0;

    while !session.is_over() && plies < max_plies {
        match session.take_turn_auto()? {
            Ply::Moved(side, mv) => info!(?side, %mv, "ply"),
            Ply::Passed(side) => info!(?side, "pass"),
        }
        plies += 1;
    }

    match session.winner() {
        Some(side) => println!("{side:?} wins after {plies} plies"),
        None => println!("no winner after {plies} plies"),
    }
    Ok(())
}

/// Prints the starting position's legal moves as JSON.
fn run_legal() -> Result<()> {
    let position = Position::initial();
    let moves: Vec<Move> = legal_moves(&position).to_vec();
    println!("{}", serde_json::to_string_pretty(&moves)?);
    Ok(())
}
