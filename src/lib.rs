//! Crossings - a two-player race-and-jump game on a bordered grid.
//!
//! Across pushes its three tokens rightward off the board while Down
//! pushes its three tokens downward; a token steps one cell forward or,
//! when an opposing token blocks the step, jumps over it. The first side
//! to take every token past its goal edge wins.
//!
//! # Architecture
//!
//! - **Board**: [`Position`] holds every token's cell plus the side to
//!   move, with occupancy queries and unchecked move application
//! - **Rules**: deterministic move generation and win detection, pure
//!   functions over [`Position`]
//! - **Search**: a shallow depth-bounded classifier that picks the first
//!   move leaving the opponent lost, falling back to the first legal move
//! - **Session**: the driver that alternates turns, passes for a stuck
//!   side, and declares the winner
//!
//! # Example
//!
//! ```
//! use crossings::Session;
//!
//! let mut session = Session::new();
//! while !session.is_over() {
//!     session.take_turn_auto().expect("match not over");
//! }
//! assert!(session.winner().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod rules;
mod search;
mod session;

// Invariants are part of the public testing surface
pub mod invariants;

// Crate-level exports - board model
pub use board::{BOARD_SIZE, Coord, Move, Position, Side, TOKENS_PER_SIDE};

// Crate-level exports - rules
pub use rules::{MoveList, has_legal_moves, has_won, legal_moves, valid_move_from, winner};

// Crate-level exports - search
pub use search::{Outlook, Search, SnapshotStack, find_best_move};

// Crate-level exports - match driver
pub use session::{Ply, Session, TurnError};
