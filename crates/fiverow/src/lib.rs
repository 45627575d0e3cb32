//! Five-in-a-row game logic with full time travel.
//!
//! Two players alternate placing marks on a square grid; a straight or
//! diagonal run of matching marks wins, and a full board without one is a
//! draw. The crate keeps every position ever reached: a [`History`] is a
//! list of immutable [`Board`] snapshots plus a pointer, so any earlier
//! position can be revisited, judged, or branched from.
//!
//! The rules are pure functions of a single snapshot. Judging a rewound
//! position is exactly the same operation as judging the live one, which
//! is what makes time travel safe to bolt on.
//!
//! ```
//! use fiverow::{History, Outcome};
//!
//! let history = History::new(16, 5).play(0).play(17).play(1);
//! assert_eq!(history.move_count(), 3);
//! assert_eq!(history.outcome(), Outcome::InProgress);
//!
//! // Rewind two moves and branch; the abandoned future is discarded.
//! let mut history = history;
//! history.jump_to(1)?;
//! let history = history.play(40);
//! assert_eq!(history.move_count(), 2);
//! # Ok::<(), fiverow::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
pub mod invariants;
pub mod rules;
mod types;

pub use history::{History, HistoryError};
pub use rules::evaluate;
pub use types::{
    Board, BoardError, Outcome, Player, Square, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LEN,
};
