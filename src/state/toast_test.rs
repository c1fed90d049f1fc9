use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().is_empty());
}

#[test]
fn push_appends_in_arrival_order() {
    let mut state = ToastState::default();
    state.push(Notice::success("first"));
    state.push(Notice::warning("second"));
    let messages: Vec<_> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
    assert_eq!(state.items[1].severity, Severity::Warning);
}

#[test]
fn push_assigns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notice::success("a"));
    let b = state.push(Notice::success("b"));
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = ToastState::default();
    let a = state.push(Notice::success("a"));
    let b = state.push(Notice::error("b"));
    assert!(state.dismiss(a));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_twice_reports_missing() {
    let mut state = ToastState::default();
    let a = state.push(Notice::success("a"));
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(Notice::success("a"));
    state.dismiss(a);
    let b = state.push(Notice::success("b"));
    assert_ne!(a, b);
    assert!(!state.dismiss(a));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn toast_class_uses_severity_modifier() {
    assert_eq!(toast_class(Severity::Success), "toast toast--success");
    assert_eq!(toast_class(Severity::Warning), "toast toast--warning");
    assert_eq!(toast_class(Severity::Error), "toast toast--error");
}
