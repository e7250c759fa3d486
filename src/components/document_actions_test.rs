use super::*;

// =============================================================
// title_is_emphasized
// =============================================================

#[test]
fn title_emphasized_without_any_secondary_label() {
    assert!(title_is_emphasized(None, false));
    assert!(title_is_emphasized(None, true));
}

#[test]
fn title_emphasized_when_secondary_label_is_empty() {
    assert!(title_is_emphasized(Some(""), true));
}

#[test]
fn title_emphasized_when_secondary_context_inactive() {
    assert!(title_is_emphasized(Some("Header"), false));
}

#[test]
fn title_recedes_for_active_secondary_label() {
    assert!(!title_is_emphasized(Some("Header"), true));
}

// =============================================================
// class helpers
// =============================================================

#[test]
fn wrapper_class_marks_secondary_presence() {
    assert_eq!(wrapper_class(false), "document-actions");
    assert!(wrapper_class(true).contains("--has-secondary"));
}

#[test]
fn title_and_secondary_classes_are_mutually_exclusive() {
    assert!(title_class(true).contains("--emphasized"));
    assert!(title_class(false).contains("--muted"));
    assert!(secondary_class(true).contains("--emphasized"));
    assert!(secondary_class(false).contains("--muted"));
}
