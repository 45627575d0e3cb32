//! Game history: the full timeline of snapshots plus a movable pointer.

use crate::rules;
use crate::types::{Board, Outcome, Player, Square, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LEN};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error raised when a pointer move or a restored timeline names no valid
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested pointer lies beyond the last snapshot.
    #[display("jump target {target} is out of range for a history of {len} snapshots")]
    OutOfRange {
        /// The pointer that was requested.
        target: usize,
        /// Number of snapshots currently on the timeline.
        len: usize,
    },
    /// A restored timeline with no snapshots at all.
    #[display("a history must hold at least the starting board")]
    EmptyTimeline,
    /// A restored timeline mixing boards of different sizes.
    #[display("snapshot of size {actual} in a timeline of size {expected}")]
    MixedSizes {
        /// Side length of the first snapshot.
        expected: usize,
        /// Side length of the offending snapshot.
        actual: usize,
    },
}

impl std::error::Error for HistoryError {}

/// The timeline of one game: every board since the start, oldest first,
/// plus a pointer selecting which snapshot is "now".
///
/// `snapshots[0]` is the empty starting board and `snapshots[i]` is the
/// position after `i` moves. Snapshots are immutable; [`History::play`]
/// appends a fresh board rather than editing the current one, so earlier
/// entries can be revisited at any time. Playing from a rewound pointer
/// first discards everything beyond it, exactly as if the abandoned moves
/// had never happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    snapshots: Vec<Board>,
    current: usize,
    win_len: usize,
}

/// Unvalidated mirror of [`History`] used to check deserialized data.
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    current: usize,
    win_len: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        History::from_snapshots(raw.snapshots, raw.current, raw.win_len)
    }
}

impl History {
    /// Starts a new game on an empty `size` x `size` board, where a run of
    /// `win_len` marks wins.
    pub fn new(size: usize, win_len: usize) -> Self {
        Self {
            snapshots: vec![Board::new(size)],
            current: 0,
            win_len,
        }
    }

    /// Rebuilds a history from stored snapshots, enforcing what the
    /// transitions keep true by construction: at least one snapshot, one
    /// board size throughout, and a pointer that stays on the timeline.
    pub fn from_snapshots(
        snapshots: Vec<Board>,
        current: usize,
        win_len: usize,
    ) -> Result<Self, HistoryError> {
        let expected = match snapshots.first() {
            Some(first) => first.size(),
            None => return Err(HistoryError::EmptyTimeline),
        };
        if let Some(snapshot) = snapshots.iter().find(|snapshot| snapshot.size() != expected) {
            return Err(HistoryError::MixedSizes {
                expected,
                actual: snapshot.size(),
            });
        }
        if current >= snapshots.len() {
            return Err(HistoryError::OutOfRange {
                target: current,
                len: snapshots.len(),
            });
        }
        Ok(Self {
            snapshots,
            current,
            win_len,
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.snapshots[0].size()
    }

    /// Run length required to win.
    pub fn win_len(&self) -> usize {
        self.win_len
    }

    /// The pointer: how many moves precede the current snapshot.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The snapshot the pointer selects.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Every snapshot on the timeline, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of moves on the timeline. The pointer may sit earlier.
    pub fn move_count(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// The player whose turn it is at the current snapshot.
    ///
    /// X owns every even pointer: X opens the game, and rewinding to an
    /// even pointer hands the turn back to X.
    pub fn to_move(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Judges the current snapshot.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board(), self.win_len)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Plays the to-move player's mark at `square`, returning the extended
    /// history with the pointer on the new snapshot.
    ///
    /// When the pointer sits mid-timeline, the moves beyond it are
    /// discarded before the new one is appended.
    ///
    /// Requests that cannot be honored return the history unchanged: the
    /// game is already decided, the square is occupied, or the index falls
    /// off the grid. Rejection is silent because every such request is an
    /// ordinary interaction, a click on a dead square, not a fault.
    #[must_use = "play returns the updated history"]
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play(mut self, square: usize) -> Self {
        if self.outcome().is_decided() {
            debug!("ignoring move: game already decided");
            return self;
        }
        if !self.board().is_empty(square) {
            debug!("ignoring move: square unavailable");
            return self;
        }
        let next = self
            .board()
            .with_square(square, Square::Occupied(self.to_move()));
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current += 1;
        debug!(current = self.current, "move accepted");
        crate::invariants::debug_assert_invariants(&self);
        self
    }

    /// Moves the pointer to `target` and returns it. No snapshot changes.
    ///
    /// Unlike [`History::play`], an out-of-range target is a caller bug,
    /// not a user interaction, so it is reported instead of ignored. The
    /// history is left untouched on error.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, target: usize) -> Result<usize, HistoryError> {
        if target >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                target,
                len: self.snapshots.len(),
            });
        }
        self.current = target;
        Ok(self.current)
    }

    /// Builds a history directly from parts, bypassing the transitions.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current: usize, win_len: usize) -> Self {
        Self {
            snapshots,
            current,
            win_len,
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_WIN_LEN)
    }
}
