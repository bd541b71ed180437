//! No two tokens may share a cell.

use super::Invariant;
use crate::board::{Position, Side};
use strum::IntoEnumIterator;
use tracing::warn;

/// Invariant: every token occupies its own cell.
///
/// Enforced only through move legality (a move lands on an empty cell);
/// nothing ever deduplicates tokens after the fact. Finish cells cannot
/// collide either, because each token finishes at the end of its own lane.
pub struct ExclusiveOccupancy;

impl Invariant<Position> for ExclusiveOccupancy {
    fn holds(position: &Position) -> bool {
        let cells: Vec<_> = Side::iter()
            .flat_map(|side| position.tokens(side).iter().copied())
            .collect();

        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                if a == b {
                    warn!(cell = %a, "two tokens share a cell");
                    return false;
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "no two tokens occupy the same cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn test_holds_for_initial_position() {
        assert!(ExclusiveOccupancy::holds(&Position::initial()));
    }

    #[test]
    fn test_detects_shared_cell() {
        let position = Position::new(
            [Coord::new(1, 1), Coord::new(2, 0), Coord::new(3, 0)],
            [Coord::new(1, 1), Coord::new(0, 2), Coord::new(0, 3)],
            Side::Down,
        );
        assert!(!ExclusiveOccupancy::holds(&position));
    }
}
