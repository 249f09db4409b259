use super::*;

#[test]
fn undo_then_redo_round_trips() {
    let mut h = History::default();
    h.record(1);
    h.record(2);
    assert_eq!(h.undo(3), Some(2));
    assert_eq!(h.undo(2), Some(1));
    assert_eq!(h.undo(1), None);
    assert_eq!(h.redo(1), Some(2));
    assert_eq!(h.redo(2), Some(3));
    assert_eq!(h.redo(3), None);
}

#[test]
fn recording_clears_redo() {
    let mut h = History::default();
    h.record("a");
    assert_eq!(h.undo("b"), Some("a"));
    assert!(h.can_redo());
    h.record("a");
    assert!(!h.can_redo());
}

#[test]
fn oldest_snapshots_fall_off() {
    let mut h = History::default();
    for v in 0..=HISTORY_LIMIT {
        h.record(v);
    }
    assert_eq!(h.undo_len(), HISTORY_LIMIT);
    let mut current = HISTORY_LIMIT + 1;
    while let Some(prev) = h.undo(current) {
        current = prev;
    }
    // Snapshot 0 was evicted.
    assert_eq!(current, 1);
}

#[test]
fn zero_limit_keeps_nothing() {
    let mut h = History::with_limit(0);
    h.record(1);
    assert!(!h.can_undo());
}
