use super::*;

use std::cell::RefCell;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_toasts() {
    let state = UiState::default();
    assert!(state.toasts.is_empty());
}

// =============================================================
// Toast bookkeeping
// =============================================================

#[test]
fn push_toast_assigns_increasing_ids() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastKind::Success, "one");
    let second = state.push_toast(ToastKind::Error, "two");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_toast_records_kind_and_message() {
    let mut state = UiState::default();
    let id = state.push_toast(ToastKind::Info, "Session cleared");
    let toast = &state.toasts[0];
    assert_eq!(toast.id, id);
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.message, "Session cleared");
}

#[test]
fn dismiss_toast_removes_only_the_target() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastKind::Success, "one");
    let second = state.push_toast(ToastKind::Error, "two");
    state.dismiss_toast(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_toast_ignores_unknown_ids() {
    let mut state = UiState::default();
    state.push_toast(ToastKind::Success, "one");
    state.dismiss_toast(999);
    assert_eq!(state.toasts.len(), 1);
}

// =============================================================
// Notifier blanket impl
// =============================================================

#[test]
fn closures_implement_notifier() {
    let seen = RefCell::new(Vec::new());
    let notify = |kind: ToastKind, message: &str| {
        seen.borrow_mut().push((kind, message.to_owned()));
    };
    notify.notify(ToastKind::Error, "boom");
    assert_eq!(seen.into_inner(), vec![(ToastKind::Error, "boom".to_owned())]);
}
