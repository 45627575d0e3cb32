//! Integration tests for the time-travel history through the public API.

use fiverow::invariants;
use fiverow::{History, HistoryError, Outcome, Player, Square};

/// Plays out an X win along row 0 with O answering on row 1.
fn won_history() -> History {
    let mut history = History::new(16, 5);
    for col in 0..4 {
        history = history.play(col).play(16 + col);
    }
    history.play(4)
}

#[test]
fn test_history_grows_one_per_move() {
    let mut history = History::new(16, 5);
    for (moves, square) in [0, 17, 34, 51].into_iter().enumerate() {
        history = history.play(square);
        assert_eq!(history.move_count(), moves + 1);
        assert_eq!(history.current(), moves + 1);
    }
}

#[test]
fn test_snapshots_never_rewritten() {
    let mut history = History::new(16, 5);
    let mut seen: Vec<_> = history.snapshots().to_vec();
    for square in [0, 17, 34, 51, 68] {
        history = history.play(square);
        assert_eq!(&history.snapshots()[..seen.len()], seen.as_slice());
        seen = history.snapshots().to_vec();
    }
}

#[test]
fn test_branch_discards_future() {
    let mut history = History::new(16, 5).play(0).play(1);
    assert_eq!(history.snapshots().len(), 3);

    history.jump_to(0).unwrap();
    let history = history.play(5);

    assert_eq!(history.snapshots().len(), 2);
    assert_eq!(history.current(), 1);
    assert_eq!(history.board().get(5), Some(Square::Occupied(Player::X)));
    assert_eq!(history.board().get(0), Some(Square::Empty));
}

#[test]
fn test_occupied_square_noop() {
    let history = History::new(16, 5).play(0).play(1);
    let before = history.clone();
    let history = history.play(0);
    assert_eq!(history, before);
}

#[test]
fn test_decided_game_noop() {
    let history = won_history();
    assert_eq!(history.outcome().winner(), Some(Player::X));
    let before = history.clone();
    let history = history.play(100);
    assert_eq!(history, before);
}

#[test]
fn test_draw_freezes_board() {
    // On a 2x2 board with run length three, no run can ever complete.
    let history = History::new(2, 3).play(0).play(1).play(2).play(3);
    assert_eq!(history.outcome(), Outcome::Draw);
    let before = history.clone();
    let history = history.play(0);
    assert_eq!(history, before);
}

#[test]
fn test_jump_bounds() {
    let mut history = History::new(16, 5).play(0);
    assert_eq!(
        history.jump_to(5),
        Err(HistoryError::OutOfRange { target: 5, len: 2 })
    );
    assert_eq!(history.current(), 1);
    assert_eq!(history.jump_to(0), Ok(0));
    assert_eq!(history.jump_to(1), Ok(1));
}

#[test]
fn test_rewind_reopens_game() {
    let mut history = won_history();
    assert!(history.outcome().is_decided());

    history.jump_to(0).unwrap();
    assert_eq!(history.outcome(), Outcome::InProgress);
    assert_eq!(history.to_move(), Player::X);

    history.jump_to(9).unwrap();
    assert_eq!(history.outcome().winner(), Some(Player::X));
}

#[test]
fn test_branch_before_win() {
    // Rewind to just before X's winning move; X plays elsewhere instead,
    // so the run is never completed on the new timeline.
    let mut history = won_history();
    history.jump_to(8).unwrap();
    let history = history.play(100);
    assert_eq!(history.move_count(), 9);
    assert_eq!(history.outcome(), Outcome::InProgress);
    assert_eq!(history.board().get(100), Some(Square::Occupied(Player::X)));
    assert_eq!(history.board().get(4), Some(Square::Empty));
}

#[test]
fn test_parity_follows_pointer() {
    let mut history = History::new(16, 5).play(0).play(1).play(2);
    assert_eq!(history.to_move(), Player::O);
    history.jump_to(0).unwrap();
    assert_eq!(history.to_move(), Player::X);
    history.jump_to(1).unwrap();
    assert_eq!(history.to_move(), Player::O);
}

#[test]
fn test_invariants_hold_throughout() {
    let mut history = History::new(16, 5);
    assert!(invariants::check_all(&history).is_ok());

    for square in [0, 17, 34, 51] {
        history = history.play(square);
        assert!(invariants::check_all(&history).is_ok());
    }

    history.jump_to(2).unwrap();
    assert!(invariants::check_all(&history).is_ok());

    let branched = history.play(200);
    assert!(invariants::check_all(&branched).is_ok());
}

#[test]
fn test_serde_round_trip() {
    let mut history = History::new(16, 5).play(0).play(17).play(1);
    history.jump_to(1).unwrap();
    let json = serde_json::to_string(&history).expect("history serializes");
    let back: History = serde_json::from_str(&json).expect("history deserializes");
    assert_eq!(back, history);
    assert_eq!(back.current(), 1);
}

#[test]
fn test_malformed_history_rejected() {
    let json = r#"{"snapshots": [], "current": 0, "win_len": 5}"#;
    let restored: Result<History, _> = serde_json::from_str(json);
    assert!(restored.is_err());
}
