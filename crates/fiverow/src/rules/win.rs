//! Win detection: locating a completed run on a board snapshot.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Scans the board for a run of `win_len` identical marks.
///
/// Candidate lines are enumerated in a fixed order: anchors walk the grid
/// row-major, and each anchor contributes its horizontal, vertical,
/// main-diagonal, and anti-diagonal line, in that order, whenever the line
/// fits on the grid. The first candidate whose squares all hold one mark is
/// returned, so the reported line is deterministic even when several runs
/// complete at once.
///
/// Returns the winning player together with the run's row-major indices,
/// listed from the anchor outward.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, win_len: usize) -> Option<(Player, Vec<usize>)> {
    let size = board.size();
    if win_len == 0 || win_len > size {
        return None;
    }
    for row in 0..size {
        for col in 0..size {
            // Rightward: needs win_len columns starting at col.
            if col + win_len <= size {
                let hit = check_line(board, win_len, |t| board.index_of(row, col + t));
                if hit.is_some() {
                    return hit;
                }
            }
            // Downward: needs win_len rows starting at row.
            if row + win_len <= size {
                let hit = check_line(board, win_len, |t| board.index_of(row + t, col));
                if hit.is_some() {
                    return hit;
                }
            }
            // Down-right: needs both.
            if row + win_len <= size && col + win_len <= size {
                let hit = check_line(board, win_len, |t| board.index_of(row + t, col + t));
                if hit.is_some() {
                    return hit;
                }
            }
            // Up-right: needs win_len rows above (inclusive) and columns right.
            if row + 1 >= win_len && col + win_len <= size {
                let hit = check_line(board, win_len, |t| board.index_of(row - t, col + t));
                if hit.is_some() {
                    return hit;
                }
            }
        }
    }
    None
}

/// Tests one candidate line, described by a mapping from offset to index.
fn check_line(
    board: &Board,
    win_len: usize,
    index_at: impl Fn(usize) -> usize,
) -> Option<(Player, Vec<usize>)> {
    let player = match board.get(index_at(0)) {
        Some(Square::Occupied(player)) => player,
        _ => return None,
    };
    for t in 1..win_len {
        if board.get(index_at(t)) != Some(Square::Occupied(player)) {
            return None;
        }
    }
    Some((player, (0..win_len).map(index_at).collect()))
}
