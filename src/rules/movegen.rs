//! Move generation.
//!
//! Generation is deterministic and order-preserving: tokens are visited in
//! stored index order, and each token contributes at most one move. A
//! token's one-step advance is taken when its step cell is free; the jump
//! is examined only when the step cell is occupied, and only an opposing
//! occupant can be jumped. A token whose step cell is off the board is
//! done racing and contributes nothing.

use crate::board::{Coord, Move, Position, Side, TOKENS_PER_SIDE};
use smallvec::SmallVec;
use tracing::instrument;

/// Legal moves for one position, at most one per token.
pub type MoveList = SmallVec<[Move; TOKENS_PER_SIDE]>;

/// Enumerates every legal move for the side to move, in token index order.
#[instrument(skip(position), fields(side = ?position.to_move()))]
pub fn legal_moves(position: &Position) -> MoveList {
    moves_for(position, position.to_move())
}

/// True when `side` would have at least one legal move if it were to move.
///
/// Purely a query: the position, including its side to move, is left
/// untouched.
pub fn has_legal_moves(side: Side, position: &Position) -> bool {
    !moves_for(position, side).is_empty()
}

/// Resolves a cell selection into the move its token would make.
///
/// Returns `None` when the cell holds no token of the side to move, or
/// when the token there is blocked. The step-else-jump decision is the
/// same one the generator makes for that token.
#[instrument(skip(position), fields(side = ?position.to_move()))]
pub fn valid_move_from(position: &Position, cell: Coord) -> Option<Move> {
    let side = position.to_move();
    position.token_at(cell, side)?;
    move_for_token(position, side, cell)
}

fn moves_for(position: &Position, side: Side) -> MoveList {
    position
        .tokens(side)
        .iter()
        .filter_map(|&from| move_for_token(position, side, from))
        .collect()
}

/// Step-else-jump decision for the token at `from`.
fn move_for_token(position: &Position, side: Side, from: Coord) -> Option<Move> {
    let step = from.forward(side, 1);
    if !step.on_board() {
        return None;
    }
    if position.is_empty(step) {
        return Some(Move::new(from, step));
    }
    // Step cell occupied: legal only as a jump over an opposing token onto
    // an empty landing cell. A same-side blocker ends this token's turn.
    let landing = from.forward(side, 2);
    if landing.on_board()
        && position.is_empty(landing)
        && position.token_at(step, side.opponent()).is_some()
    {
        return Some(Move::new(from, landing));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_step_before_jump_per_token() {
        // Free step cell: the step is taken, the jump is never examined.
        let position = Position::new(
            [Coord::new(1, 1), Coord::new(2, 4), Coord::new(3, 4)],
            [Coord::new(4, 1), Coord::new(4, 2), Coord::new(0, 3)],
            Side::Across,
        );
        let moves = legal_moves(&position);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0], Move::new(Coord::new(1, 1), Coord::new(1, 2)));
    }

    #[test]
    fn test_jump_over_opponent() {
        let position = Position::new(
            [Coord::new(1, 4), Coord::new(2, 2), Coord::new(3, 4)],
            [Coord::new(4, 1), Coord::new(4, 2), Coord::new(2, 3)],
            Side::Across,
        );
        let moves = legal_moves(&position);
        assert_eq!(
            moves.as_slice(),
            &[Move::new(Coord::new(2, 2), Coord::new(2, 4))]
        );
    }

    #[test]
    fn test_no_jump_when_landing_occupied() {
        // Across token walled in: step and landing cells both held by Down.
        let position = Position::new(
            [Coord::new(1, 4), Coord::new(2, 0), Coord::new(3, 4)],
            [Coord::new(2, 1), Coord::new(2, 2), Coord::new(0, 3)],
            Side::Across,
        );
        let moves = legal_moves(&position);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_no_jump_when_step_off_board() {
        // A finished token has nowhere to go, step or jump.
        let position = Position::new(
            [Coord::new(1, BOARD_SIZE + 1), Coord::new(2, 0), Coord::new(3, 0)],
            [Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)],
            Side::Across,
        );
        let moves = legal_moves(&position);
        assert!(moves.iter().all(|mv| mv.from != Coord::new(1, BOARD_SIZE + 1)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_down_moves_vertically() {
        let position = Position::new(
            [Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)],
            [Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)],
            Side::Down,
        );
        let moves = legal_moves(&position);
        assert_eq!(
            moves.as_slice(),
            &[
                Move::new(Coord::new(0, 1), Coord::new(1, 1)),
                Move::new(Coord::new(0, 2), Coord::new(1, 2)),
                Move::new(Coord::new(0, 3), Coord::new(1, 3)),
            ]
        );
    }

    #[test]
    fn test_valid_move_from_matches_generator() {
        let position = Position::initial();
        for mv in legal_moves(&position) {
            assert_eq!(valid_move_from(&position, mv.from), Some(mv));
        }
        assert_eq!(valid_move_from(&position, Coord::new(2, 2)), None);
        // Opposing token is not selectable.
        assert_eq!(valid_move_from(&position, Coord::new(0, 1)), None);
    }
}
