//! Win detection.

use crate::board::{BOARD_SIZE, Position, Side};
use strum::IntoEnumIterator;
use tracing::instrument;

/// True when every one of `side`'s tokens has crossed its goal edge.
///
/// Across finishes a token by pushing it past column [`BOARD_SIZE`]; Down
/// by pushing it past row [`BOARD_SIZE`].
#[instrument(skip(position))]
pub fn has_won(side: Side, position: &Position) -> bool {
    position.tokens(side).iter().all(|token| match side {
        Side::Across => token.col > BOARD_SIZE,
        Side::Down => token.row > BOARD_SIZE,
    })
}

/// The side that has finished every token, if any.
///
/// Across is checked before Down, so a same-ply double finish resolves in
/// Across's favour.
pub fn winner(position: &Position) -> Option<Side> {
    Side::iter().find(|&side| has_won(side, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn test_no_winner_at_start() {
        let position = Position::initial();
        assert!(!has_won(Side::Across, &position));
        assert!(!has_won(Side::Down, &position));
        assert_eq!(winner(&position), None);
    }

    #[test]
    fn test_one_finished_token_is_not_a_win() {
        let position = Position::new(
            [Coord::new(1, 4), Coord::new(2, 3), Coord::new(3, 0)],
            [Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)],
            Side::Across,
        );
        assert!(!has_won(Side::Across, &position));
    }

    #[test]
    fn test_all_tokens_out_wins() {
        let position = Position::new(
            [Coord::new(1, 4), Coord::new(2, 4), Coord::new(3, 4)],
            [Coord::new(4, 1), Coord::new(2, 2), Coord::new(0, 3)],
            Side::Down,
        );
        assert!(has_won(Side::Across, &position));
        assert!(!has_won(Side::Down, &position));
        assert_eq!(winner(&position), Some(Side::Across));
    }

    #[test]
    fn test_across_resolves_first() {
        let position = Position::new(
            [Coord::new(1, 4), Coord::new(2, 4), Coord::new(3, 4)],
            [Coord::new(4, 1), Coord::new(4, 2), Coord::new(4, 3)],
            Side::Across,
        );
        assert_eq!(winner(&position), Some(Side::Across));
    }
}
