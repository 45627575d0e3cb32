//! Pure rules for judging a board snapshot.
//!
//! Everything here is a function of the snapshot alone: no history, no
//! turn bookkeeping, no caching. Judging a position after time travel is
//! therefore the same operation as judging it live.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winning_line;

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Judges a board snapshot.
///
/// A completed run of `win_len` marks decides the game for its owner; a
/// full board without one is a draw; anything else is still in progress.
/// The win check runs first, so a full board containing a run is reported
/// as a win.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, win_len: usize) -> Outcome {
    if let Some((winner, line)) = win::find_winning_line(board, win_len) {
        return Outcome::Win { winner, line };
    }
    if draw::is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
