//! Tokens never leave their lane.

use super::Invariant;
use crate::board::{BOARD_SIZE, Position, Side};
use tracing::warn;

/// Invariant: every token stays pinned to its starting lane.
///
/// Moves are axis-aligned, so the Across token at index `i` keeps row
/// `i + 1` forever and the Down token at index `i` keeps column `i + 1`,
/// while the travelling coordinate stays within the bordered range.
pub struct LaneAlignment;

impl Invariant<Position> for LaneAlignment {
    fn holds(position: &Position) -> bool {
        let across_ok = position
            .tokens(Side::Across)
            .iter()
            .enumerate()
            .all(|(i, t)| t.row == i as u8 + 1 && t.col <= BOARD_SIZE + 1);

        let down_ok = position
            .tokens(Side::Down)
            .iter()
            .enumerate()
            .all(|(i, t)| t.col == i as u8 + 1 && t.row <= BOARD_SIZE + 1);

        if !across_ok || !down_ok {
            warn!(across_ok, down_ok, "token strayed from its lane");
        }
        across_ok && down_ok
    }

    fn description() -> &'static str {
        "every token stays in its starting lane"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn test_holds_for_initial_position() {
        assert!(LaneAlignment::holds(&Position::initial()));
    }

    #[test]
    fn test_detects_row_drift() {
        let position = Position::new(
            [Coord::new(2, 1), Coord::new(2, 0), Coord::new(3, 0)],
            [Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)],
            Side::Across,
        );
        assert!(!LaneAlignment::holds(&position));
    }

    #[test]
    fn test_detects_out_of_range_column() {
        let position = Position::new(
            [Coord::new(1, BOARD_SIZE + 2), Coord::new(2, 0), Coord::new(3, 0)],
            [Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)],
            Side::Across,
        );
        assert!(!LaneAlignment::holds(&position));
    }
}
