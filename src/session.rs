//! Live-match driver.
//!
//! [`Session`] owns the position between plies and carries the turn logic
//! that sits outside the move rules: strict alternation, passing when the
//! side to move is stuck, and declaring the winner. The search never sees
//! the live position, only clones of it.

use crate::board::{Coord, Move, Position, Side};
use crate::invariants::assert_invariants;
use crate::rules::{has_legal_moves, valid_move_from, winner};
use crate::search::find_best_move;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// One turn's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ply {
    /// The side played a move.
    Moved(Side, Move),
    /// The side had no legal move; the turn passed to the opponent.
    Passed(Side),
}

/// Errors surfaced when a turn cannot be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// The match already has a winner.
    #[display("the match is already over")]
    MatchOver,

    /// The selected cell holds no movable token of the side to move.
    #[display("no legal move from {}", _0)]
    NoMoveFrom(Coord),
}

impl std::error::Error for TurnError {}

/// A match evolving in place, from the starting layout to a win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    position: Position,
}

impl Session {
    /// Starts a fresh match from the standard layout.
    #[instrument]
    pub fn new() -> Self {
        info!("starting new match");
        Self {
            position: Position::initial(),
        }
    }

    /// Resumes a match from an arbitrary position.
    pub fn from_position(position: Position) -> Self {
        Self { position }
    }

    /// The live position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Side {
        self.position.to_move()
    }

    /// The winning side, once every one of its tokens is out.
    ///
    /// Across is checked before Down; see [`crate::winner`].
    pub fn winner(&self) -> Option<Side> {
        winner(&self.position)
    }

    /// True once a side has won.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Takes the current side's turn from a cell selection.
    ///
    /// A stuck side passes regardless of the selection. Otherwise the
    /// selection must name a cell whose token has a move.
    #[instrument(skip(self), fields(side = ?self.to_move()))]
    pub fn take_turn_at(&mut self, cell: Coord) -> Result<Ply, TurnError> {
        self.guard_not_over()?;

        let side = self.position.to_move();
        if !has_legal_moves(side, &self.position) {
            return Ok(self.pass(side));
        }

        let mv = valid_move_from(&self.position, cell).ok_or_else(|| {
            warn!(%cell, "selection has no legal move");
            TurnError::NoMoveFrom(cell)
        })?;
        Ok(self.commit(side, mv))
    }

    /// Takes the current side's turn with the search choosing the move.
    ///
    /// Passes when the search reports no legal move.
    #[instrument(skip(self), fields(side = ?self.to_move()))]
    pub fn take_turn_auto(&mut self) -> Result<Ply, TurnError> {
        self.guard_not_over()?;

        let side = self.position.to_move();
        match find_best_move(&self.position) {
            Some(mv) => Ok(self.commit(side, mv)),
            None => Ok(self.pass(side)),
        }
    }

    /// Abandons the current match and starts over from the standard layout.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("restarting match");
        self.position = Position::initial();
    }

    fn guard_not_over(&self) -> Result<(), TurnError> {
        if self.is_over() {
            warn!("turn rejected: match already over");
            return Err(TurnError::MatchOver);
        }
        Ok(())
    }

    fn pass(&mut self, side: Side) -> Ply {
        info!(?side, "no legal moves; turn passes");
        self.position.flip_turn();
        Ply::Passed(side)
    }

    fn commit(&mut self, side: Side, mv: Move) -> Ply {
        self.position.apply(mv);
        self.position.flip_turn();
        assert_invariants(&self.position);
        info!(?side, %mv, "ply applied");
        Ply::Moved(side, mv)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut session = Session::new();
        assert_eq!(session.to_move(), Side::Across);
        session.take_turn_at(Coord::new(1, 0)).unwrap();
        assert_eq!(session.to_move(), Side::Down);
        session.take_turn_auto().unwrap();
        assert_eq!(session.to_move(), Side::Across);
    }

    #[test]
    fn test_bad_selection_is_an_error() {
        let mut session = Session::new();
        let err = session.take_turn_at(Coord::new(2, 2)).unwrap_err();
        assert_eq!(err, TurnError::NoMoveFrom(Coord::new(2, 2)));
        // The failed selection consumed nothing.
        assert_eq!(session.to_move(), Side::Across);
    }

    #[test]
    fn test_selecting_opponent_token_is_an_error() {
        let mut session = Session::new();
        assert!(session.take_turn_at(Coord::new(0, 1)).is_err());
    }
}
