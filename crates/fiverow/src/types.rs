//! Core domain types: players, squares, board snapshots, and outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default board side length (a 16x16 grid).
pub const DEFAULT_BOARD_SIZE: usize = 16;

/// Default run length required to win.
pub const DEFAULT_WIN_LEN: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Players and squares
// ─────────────────────────────────────────────────────────────────────────────

/// A player in the game. X always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// The first player.
    X,
    /// The second player.
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark has been placed here.
    Empty,
    /// A player's mark occupies this square.
    Occupied(Player),
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(player) => write!(f, "{player}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Board snapshots
// ─────────────────────────────────────────────────────────────────────────────

/// Error raised when constructing a board from raw squares.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The square list does not cover a `size` x `size` grid.
    #[display("a board of size {size} requires {expected} squares, got {actual}")]
    SizeMismatch {
        /// Declared side length.
        size: usize,
        /// Number of squares the side length requires.
        expected: usize,
        /// Number of squares actually supplied.
        actual: usize,
    },
}

impl std::error::Error for BoardError {}

/// An immutable snapshot of the grid, stored row-major.
///
/// Index `row * size + col` holds the square at (`row`, `col`), with rows
/// counted from the top and columns from the left. Snapshots are never
/// mutated in place: [`Board::with_square`] returns a modified copy, so a
/// board handed out earlier stays valid forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

/// Unvalidated mirror of [`Board`] used to check deserialized data.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_squares(raw.size, raw.squares)
    }
}

impl Board {
    /// Creates an empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Builds a board from raw squares, rejecting lists whose length is not
    /// `size * size`.
    pub fn from_squares(size: usize, squares: Vec<Square>) -> Result<Self, BoardError> {
        let expected = size * size;
        if squares.len() != expected {
            return Err(BoardError::SizeMismatch {
                size,
                expected,
                actual: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of squares on the grid.
    pub fn square_count(&self) -> usize {
        self.squares.len()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Row-major index of (`row`, `col`).
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// The square at `index`, or `None` when the index falls off the grid.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Whether `index` names a square that is on the grid and unoccupied.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns a copy of the board with `index` replaced by `square`.
    ///
    /// # Panics
    ///
    /// Panics when `index` falls off the grid. Callers check bounds through
    /// [`Board::is_empty`] or [`Board::get`] first.
    pub fn with_square(&self, index: usize, square: Square) -> Self {
        let mut squares = self.squares.clone();
        squares[index] = square;
        Self {
            size: self.size,
            squares,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.squares[self.index_of(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Outcomes
// ─────────────────────────────────────────────────────────────────────────────

/// The verdict on a single board snapshot.
///
/// Exactly one of the three variants describes any board: a completed run
/// takes precedence, so a full board containing one is a [`Outcome::Win`],
/// never a [`Outcome::Draw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No winning run yet, and at least one square is still empty.
    InProgress,
    /// `winner` completed a run; `line` lists its square indices.
    Win {
        /// The player who completed the run.
        winner: Player,
        /// Row-major indices of the winning squares, in scan order.
        line: Vec<usize>,
    },
    /// Every square is occupied and no winning run exists.
    Draw,
}

impl Outcome {
    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Indices of the winning run, if any.
    pub fn winning_line(&self) -> Option<&[usize]> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Whether the game has ended, by win or by draw.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win { winner, .. } => write!(f, "winner {winner}"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_players() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(16);
        assert_eq!(board.square_count(), 256);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_from_squares_rejects_wrong_length() {
        let err = Board::from_squares(16, vec![Square::Empty; 5]).unwrap_err();
        assert_eq!(
            err,
            BoardError::SizeMismatch {
                size: 16,
                expected: 256,
                actual: 5,
            }
        );
    }

    #[test]
    fn test_from_squares_accepts_exact_length() {
        let board = Board::from_squares(3, vec![Square::Empty; 9]).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.square_count(), 9);
    }

    #[test]
    fn test_with_square_leaves_original_untouched() {
        let board = Board::new(4);
        let marked = board.with_square(5, Square::Occupied(Player::X));
        assert_eq!(board.get(5), Some(Square::Empty));
        assert_eq!(marked.get(5), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = Board::new(2);
        assert_eq!(board.get(4), None);
        assert!(!board.is_empty(4));
    }

    #[test]
    fn test_index_of_row_major() {
        let board = Board::new(16);
        assert_eq!(board.index_of(0, 0), 0);
        assert_eq!(board.index_of(0, 15), 15);
        assert_eq!(board.index_of(1, 0), 16);
        assert_eq!(board.index_of(15, 15), 255);
    }

    #[test]
    fn test_deserialize_malformed_board_fails() {
        let json = r#"{"size": 3, "squares": ["Empty", "Empty"]}"#;
        let result: Result<Board, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_board_serde_round_trip() {
        let board = Board::new(3).with_square(4, Square::Occupied(Player::O));
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_display_renders_marks() {
        let board = Board::new(2)
            .with_square(0, Square::Occupied(Player::X))
            .with_square(3, Square::Occupied(Player::O));
        assert_eq!(board.to_string(), "X .\n. O\n");
    }
}
