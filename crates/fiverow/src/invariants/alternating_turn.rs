//! Invariant: marks alternate between the players, X first.

use super::Invariant;
use crate::history::History;
use crate::types::{Player, Square};

/// Turns alternate starting with X.
///
/// After `i` moves the board holds `ceil(i / 2)` X marks and `floor(i / 2)`
/// O marks, so every snapshot independently witnesses that X opened the
/// game and that neither player ever moved twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().iter().enumerate().all(|(moves, board)| {
            let mut x_marks = 0;
            let mut o_marks = 0;
            for square in board.squares() {
                match square {
                    Square::Occupied(Player::X) => x_marks += 1,
                    Square::Occupied(Player::O) => o_marks += 1,
                    Square::Empty => {}
                }
            }
            x_marks == moves.div_ceil(2) && o_marks == moves / 2
        })
    }

    fn description() -> &'static str {
        "snapshot i holds ceil(i/2) X marks and floor(i/2) O marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    #[test]
    fn test_alternating_sequence_holds() {
        let history = History::new(16, 5).play(0).play(1).play(2).play(3);
        assert!(AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let after = Board::new(4).with_square(0, Square::Occupied(Player::O));
        let history = History::from_parts(vec![Board::new(4), after], 1, 3);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_double_move_violates() {
        let first = Board::new(4).with_square(0, Square::Occupied(Player::X));
        let second = first.with_square(1, Square::Occupied(Player::X));
        let history = History::from_parts(vec![Board::new(4), first, second], 2, 3);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
