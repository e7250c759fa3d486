use super::*;

#[test]
fn default_state_has_no_notices() {
    assert!(NoticesState::default().notices.is_empty());
}

#[test]
fn notices_with_distinct_ids_stack_in_order() {
    let mut state = NoticesState::default();
    state.add_success(Some("a"), "first");
    state.add_error(Some("b"), "second");
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].message, "first");
    assert_eq!(state.notices[1].message, "second");
}

#[test]
fn same_id_replaces_in_place_instead_of_stacking() {
    let mut state = NoticesState::default();
    state.add_success(Some("a"), "first");
    state.add_error(Some("b"), "second");
    state.add_error(Some("a"), "updated");
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].id, "a");
    assert_eq!(state.notices[0].kind, NoticeKind::Error);
    assert_eq!(state.notices[0].message, "updated");
}

#[test]
fn generated_ids_are_unique() {
    let mut state = NoticesState::default();
    state.add_success(None, "one");
    state.add_success(None, "two");
    assert_eq!(state.notices.len(), 2);
    assert_ne!(state.notices[0].id, state.notices[1].id);
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut state = NoticesState::default();
    state.add_success(Some("a"), "first");
    state.add_error(Some("b"), "second");
    state.dismiss("a");
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, "b");
    state.dismiss("unknown");
    assert_eq!(state.notices.len(), 1);
}
