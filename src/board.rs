//! Core domain types: sides, cells, moves, and the game position.
//!
//! The playable interior is a `BOARD_SIZE` x `BOARD_SIZE` grid surrounded by
//! a one-cell border ring. Tokens start on the ring, race across the
//! interior, and finish on the ring at the far side; a finished token is
//! never removed, its coordinate simply sits past the interior.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the playable interior. Valid coordinates on either axis
/// run from `0` to `BOARD_SIZE + 1` inclusive; the outermost index on each
/// axis is the border ring.
pub const BOARD_SIZE: u8 = 3;

/// Number of tokens each side races across the board.
pub const TOKENS_PER_SIDE: usize = BOARD_SIZE as usize;

/// A player, named for its direction of travel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Side {
    /// Moves rightward and wins by taking every token past the right edge.
    Across,
    /// Moves downward and wins by taking every token past the bottom edge.
    Down,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Across => Side::Down,
            Side::Down => Side::Across,
        }
    }
}

/// A cell on the bordered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, `0..=BOARD_SIZE + 1`.
    pub row: u8,
    /// Column index, `0..=BOARD_SIZE + 1`.
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// True when the cell lies on the bordered grid (interior plus ring).
    pub fn on_board(self) -> bool {
        self.row <= BOARD_SIZE + 1 && self.col <= BOARD_SIZE + 1
    }

    /// The cell `steps` cells forward along `side`'s axis of travel.
    ///
    /// The result may lie off the board; callers check [`Coord::on_board`].
    pub fn forward(self, side: Side, steps: u8) -> Self {
        match side {
            Side::Across => Self::new(self.row, self.col + steps),
            Side::Down => Self::new(self.row + steps, self.col),
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A move: one token travelling forward along its side's axis.
///
/// Moves are first-class domain events; they are produced by the generator
/// (or a validated cell selection) and applied without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the token leaves.
    pub from: Coord,
    /// Cell the token lands on.
    pub to: Coord,
}

impl Move {
    /// Creates a move.
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// True for a two-cell jump over an opposing token.
    pub fn is_jump(&self) -> bool {
        (self.to.row - self.from.row) + (self.to.col - self.from.col) == 2
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Complete game position: every token's cell plus the side to move.
///
/// Each side owns exactly [`TOKENS_PER_SIDE`] tokens, held in fixed index
/// order; a token is only ever moved in place, never added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    across: [Coord; TOKENS_PER_SIDE],
    down: [Coord; TOKENS_PER_SIDE],
    to_move: Side,
}

impl Position {
    /// Builds a position from explicit token layouts.
    pub fn new(
        across: [Coord; TOKENS_PER_SIDE],
        down: [Coord; TOKENS_PER_SIDE],
        to_move: Side,
    ) -> Self {
        Self {
            across,
            down,
            to_move,
        }
    }

    /// The starting layout: Across tokens down the left edge, Down tokens
    /// along the top edge, Across to move.
    #[instrument]
    pub fn initial() -> Self {
        Self {
            across: std::array::from_fn(|i| Coord::new(i as u8 + 1, 0)),
            down: std::array::from_fn(|i| Coord::new(0, i as u8 + 1)),
            to_move: Side::Across,
        }
    }

    /// Tokens belonging to `side`, in stored index order.
    pub fn tokens(&self, side: Side) -> &[Coord; TOKENS_PER_SIDE] {
        match side {
            Side::Across => &self.across,
            Side::Down => &self.down,
        }
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// True when neither side has a token at `cell`.
    pub fn is_empty(&self, cell: Coord) -> bool {
        self.across.iter().chain(self.down.iter()).all(|t| *t != cell)
    }

    /// Index of `side`'s token at `cell`, if any.
    pub fn token_at(&self, cell: Coord, side: Side) -> Option<usize> {
        self.tokens(side).iter().position(|t| *t == cell)
    }

    /// Moves the first token (index order) of the side to move whose cell
    /// equals `mv.from` onto `mv.to`.
    ///
    /// No legality check happens here; callers pass moves produced by the
    /// generator or a validated selection. The turn does not advance.
    pub fn apply(&mut self, mv: Move) {
        let tokens = match self.to_move {
            Side::Across => &mut self.across,
            Side::Down => &mut self.down,
        };
        if let Some(token) = tokens.iter_mut().find(|t| **t == mv.from) {
            *token = mv.to;
        }
    }

    /// Hands the turn to the opponent.
    pub fn flip_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}
