//! Toast notification state and the notifier side channel.
//!
//! DESIGN
//! ======
//! Managers publish through the [`Notifier`] trait instead of mutating
//! toast state directly, so state transitions can be asserted without a UI
//! and the toast stack stays a pure rendering concern.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast list plus the id counter used for dismissal bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Append a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_owned(),
        });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Side channel the state managers publish user-visible notifications
/// through, decoupled from the state mutation itself.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);
}

/// Any closure works as a notifier: the app wires one that pushes into the
/// `UiState` signal, tests wire one that records into a `Vec`.
impl<F: Fn(ToastKind, &str)> Notifier for F {
    fn notify(&self, kind: ToastKind, message: &str) {
        self(kind, message);
    }
}
