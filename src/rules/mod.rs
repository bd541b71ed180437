//! Game rules: move generation and win detection.
//!
//! Pure functions over [`crate::Position`]. Rules are separated from board
//! storage so the search and the session driver compose them without
//! sharing state.

pub mod movegen;
pub mod win;

pub use movegen::{MoveList, has_legal_moves, legal_moves, valid_move_from};
pub use win::{has_won, winner};
