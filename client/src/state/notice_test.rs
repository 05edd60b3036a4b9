use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::info("saved"));
    let b = state.push(Notice::error("failed"));
    assert!(b > a);
    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.entries[1].1.kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_matching_entry() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::info("one"));
    let b = state.push(Notice::info("two"));
    state.dismiss(a);
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].0, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NoticeState::default();
    state.push(Notice::info("one"));
    state.dismiss(99);
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::info("one"));
    state.dismiss(a);
    let b = state.push(Notice::info("two"));
    assert_ne!(a, b);
}

#[test]
fn stored_notice_keeps_kind_and_message() {
    let raw = Notice::error("server unreachable").to_stored().unwrap();
    assert_eq!(Notice::from_stored(&raw), Some(Notice::error("server unreachable")));
}

#[test]
fn stored_notice_uses_lowercase_kind() {
    let raw = Notice::info("hi").to_stored().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["kind"], "info");
}

#[test]
fn unreadable_stored_notice_is_dropped() {
    assert_eq!(Notice::from_stored("not json"), None);
    assert_eq!(Notice::from_stored(r#"{"kind":"loud","message":"x"}"#), None);
}
