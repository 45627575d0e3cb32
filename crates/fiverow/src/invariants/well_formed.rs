//! Invariant: the timeline skeleton itself is sound.

use super::Invariant;
use crate::history::History;
use crate::types::Square;

/// The history skeleton is sound.
///
/// The timeline is never empty, it opens with an entirely empty board,
/// every snapshot covers the same `size` x `size` grid, and the pointer
/// names an existing snapshot.
pub struct WellFormedInvariant;

impl Invariant for WellFormedInvariant {
    fn holds(history: &History) -> bool {
        let snapshots = history.snapshots();
        let first = match snapshots.first() {
            Some(board) => board,
            None => return false,
        };
        if first.squares().iter().any(|square| *square != Square::Empty) {
            return false;
        }
        let size = first.size();
        if !snapshots
            .iter()
            .all(|board| board.size() == size && board.square_count() == size * size)
        {
            return false;
        }
        history.current() < snapshots.len()
    }

    fn description() -> &'static str {
        "non-empty timeline starting from an empty board, uniform board size, pointer in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player};

    #[test]
    fn test_fresh_and_played_hold() {
        assert!(WellFormedInvariant::holds(&History::new(16, 5)));
        assert!(WellFormedInvariant::holds(&History::new(16, 5).play(7).play(8)));
    }

    #[test]
    fn test_empty_timeline_violates() {
        let history = History::from_parts(Vec::new(), 0, 5);
        assert!(!WellFormedInvariant::holds(&history));
    }

    #[test]
    fn test_marked_start_violates() {
        let start = Board::new(4).with_square(0, Square::Occupied(Player::X));
        let history = History::from_parts(vec![start], 0, 3);
        assert!(!WellFormedInvariant::holds(&history));
    }

    #[test]
    fn test_mixed_sizes_violates() {
        let history = History::from_parts(vec![Board::new(4), Board::new(5)], 0, 3);
        assert!(!WellFormedInvariant::holds(&history));
    }

    #[test]
    fn test_pointer_out_of_range_violates() {
        let history = History::from_parts(vec![Board::new(4)], 1, 3);
        assert!(!WellFormedInvariant::holds(&history));
    }
}
