//! Invariant: consecutive snapshots differ by exactly one new mark.

use super::Invariant;
use crate::history::History;
use crate::types::Square;

/// Each step fills exactly one previously empty square.
///
/// Between any two consecutive snapshots, exactly one square changes, and
/// that change places a mark on an empty square. Marks are never moved,
/// cleared, or overwritten, which is what makes every snapshot a faithful
/// record of the position it captured.
pub struct SingleStepInvariant;

impl Invariant for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            if before.square_count() != after.square_count() {
                return false;
            }
            let mut filled = 0;
            for (old, new) in before.squares().iter().zip(after.squares()) {
                match (old, new) {
                    (old, new) if old == new => {}
                    (Square::Empty, Square::Occupied(_)) => filled += 1,
                    _ => return false,
                }
            }
            filled == 1
        })
    }

    fn description() -> &'static str {
        "each step fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player};

    #[test]
    fn test_played_history_holds() {
        let history = History::new(16, 5).play(0).play(1).play(35);
        assert!(SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_fresh_history_holds() {
        assert!(SingleStepInvariant::holds(&History::new(16, 5)));
    }

    #[test]
    fn test_two_marks_violates() {
        let after = Board::new(4)
            .with_square(0, Square::Occupied(Player::X))
            .with_square(1, Square::Occupied(Player::O));
        let history = History::from_parts(vec![Board::new(4), after], 1, 3);
        assert!(!SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_unchanged_step_violates() {
        let history = History::from_parts(vec![Board::new(4), Board::new(4)], 1, 3);
        assert!(!SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let before = Board::new(4).with_square(0, Square::Occupied(Player::X));
        let after = Board::new(4).with_square(0, Square::Occupied(Player::O));
        let history = History::from_parts(vec![before, after], 1, 3);
        assert!(!SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_cleared_mark_violates() {
        let before = Board::new(4)
            .with_square(0, Square::Occupied(Player::X))
            .with_square(5, Square::Occupied(Player::O));
        let after = before.with_square(5, Square::Empty);
        let history = History::from_parts(vec![before, after], 1, 3);
        assert!(!SingleStepInvariant::holds(&history));
    }
}
