//! First-class invariants over game histories.
//!
//! Each invariant is a standalone, testable statement of something every
//! history produced by the transitions must satisfy. Keeping them explicit
//! serves two purposes: they document the guarantees, and they run as a
//! debug-build safety net after every accepted move.

mod alternating_turn;
mod single_step;
mod well_formed;

pub use alternating_turn::AlternatingTurnInvariant;
pub use single_step::SingleStepInvariant;
pub use well_formed::WellFormedInvariant;

use crate::history::History;

/// A property every history must satisfy.
pub trait Invariant {
    /// Whether the property holds for `history`.
    fn holds(history: &History) -> bool;

    /// One-line statement of the property.
    fn description() -> &'static str;
}

/// A named invariant that failed to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Statement of the violated property.
    pub description: &'static str,
}

/// Checks every invariant against `history`, collecting all violations
/// rather than stopping at the first.
pub fn check_all(history: &History) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();
    record::<WellFormedInvariant>(history, &mut violations);
    record::<SingleStepInvariant>(history, &mut violations);
    record::<AlternatingTurnInvariant>(history, &mut violations);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn record<I: Invariant>(history: &History, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(history) {
        violations.push(InvariantViolation {
            description: I::description(),
        });
    }
}

/// Debug-build assertion run after each accepted transition.
pub(crate) fn debug_assert_invariants(history: &History) {
    if cfg!(debug_assertions) {
        if let Err(violations) = check_all(history) {
            panic!("history invariants violated: {violations:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_histories_hold() {
        let mut history = History::new(16, 5);
        assert!(check_all(&history).is_ok());
        for (index, square) in [0, 17, 1, 20, 2].into_iter().enumerate() {
            history = history.play(square);
            assert!(check_all(&history).is_ok(), "violated after move {index}");
        }
        history.jump_to(2).unwrap();
        assert!(check_all(&history).is_ok());
    }

    #[test]
    fn test_check_all_collects_violations() {
        use crate::types::{Board, Player, Square};

        // Pointer out of range, and snapshot 1 grew two X marks at once.
        let bad = Board::new(4)
            .with_square(0, Square::Occupied(Player::X))
            .with_square(1, Square::Occupied(Player::X));
        let history = History::from_parts(vec![Board::new(4), bad], 5, 3);
        let violations = check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
