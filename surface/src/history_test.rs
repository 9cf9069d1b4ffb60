use super::*;

fn snap(tag: u8) -> Snapshot {
    Snapshot::new(2, 1, vec![tag; 8])
}

#[test]
fn new_holds_single_pristine() {
    let h = History::new(snap(0));
    assert_eq!(h.len(), 1);
    assert!(h.is_pristine());
    assert!(!h.is_empty());
}

#[test]
fn push_appends() {
    let mut h = History::new(snap(0));
    h.push(snap(1));
    h.push(snap(2));
    assert_eq!(h.len(), 3);
    assert!(!h.is_pristine());
}

#[test]
fn undo_returns_previous_state() {
    let mut h = History::new(snap(0));
    h.push(snap(1));
    h.push(snap(2));
    let restored = h.undo().unwrap();
    assert_eq!(restored.data(), snap(1).data());
    assert_eq!(h.len(), 2);
}

#[test]
fn undo_down_to_pristine() {
    let mut h = History::new(snap(0));
    h.push(snap(1));
    let restored = h.undo().unwrap();
    assert_eq!(restored.data(), snap(0).data());
    assert!(h.is_pristine());
}

#[test]
fn undo_at_pristine_is_noop() {
    let mut h = History::new(snap(0));
    assert!(h.undo().is_none());
    assert_eq!(h.len(), 1);
}

#[test]
fn clear_returns_pristine() {
    let mut h = History::new(snap(0));
    h.push(snap(1));
    h.push(snap(2));
    let pristine = h.clear().unwrap();
    assert_eq!(pristine.data(), snap(0).data());
    assert!(h.is_pristine());
}

#[test]
fn clear_at_pristine_is_noop() {
    let mut h = History::new(snap(0));
    assert!(h.clear().is_none());
    assert_eq!(h.len(), 1);
}

#[test]
fn eviction_never_drops_pristine() {
    let mut h = History::new(snap(0));
    for i in 0..(MAX_HISTORY + 5) {
        #[allow(clippy::cast_possible_truncation)]
        h.push(snap((i % 200) as u8 + 1));
    }
    assert_eq!(h.len(), MAX_HISTORY);
    // Clearing after eviction still lands exactly on the pristine snapshot.
    let pristine = h.clear().unwrap();
    assert_eq!(pristine.data(), snap(0).data());
}

#[test]
fn snapshot_accessors() {
    let s = Snapshot::new(3, 2, vec![7; 24]);
    assert_eq!(s.width(), 3);
    assert_eq!(s.height(), 2);
    assert_eq!(s.data().len(), 24);
}
