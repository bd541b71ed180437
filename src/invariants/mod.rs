//! First-class invariants over reachable positions.
//!
//! Invariants are logical properties that move legality keeps true for the
//! life of a match. They are never re-established after the fact; the
//! session debug-asserts them after each applied ply and tests check them
//! directly.

use crate::board::Position;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod exclusive_occupancy;
pub mod lane_alignment;

pub use exclusive_occupancy::ExclusiveOccupancy;
pub use lane_alignment::LaneAlignment;

/// All position invariants as a composable set.
pub type CrossingsInvariants = (ExclusiveOccupancy, LaneAlignment);

/// Asserts that all position invariants hold (debug builds only).
pub fn assert_invariants(position: &Position) {
    debug_assert!(
        CrossingsInvariants::check_all(position).is_ok(),
        "position invariant violated: {:?}",
        CrossingsInvariants::check_all(position)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Position, Side};

    #[test]
    fn test_invariants_hold_at_start() {
        let position = Position::initial();
        assert!(CrossingsInvariants::check_all(&position).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_violations() {
        // Two tokens stacked on one cell, one of them out of its lane.
        let position = Position::new(
            [Coord::new(1, 1), Coord::new(1, 1), Coord::new(3, 0)],
            [Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)],
            Side::Across,
        );
        let violations = CrossingsInvariants::check_all(&position).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
