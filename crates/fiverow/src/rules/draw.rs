//! Draw detection: recognizing a board with no room left to play.

use crate::types::{Board, Square};
use tracing::instrument;

/// Whether every square on the board is occupied.
///
/// A full board alone does not decide the game; callers rule out a win
/// first, since a completed run on a full board still counts as a win.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|square| *square != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(4)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(2);
        for index in 0..3 {
            board = board.with_square(index, Square::Occupied(Player::X));
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2);
        for index in 0..4 {
            let player = if index % 2 == 0 { Player::X } else { Player::O };
            board = board.with_square(index, Square::Occupied(player));
        }
        assert!(is_full(&board));
    }
}
