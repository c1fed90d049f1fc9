//! Transient notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Interaction actions produce [`Notice`]s; the stack keeps them in arrival
//! order (oldest first) until the auto-dismiss timer or a click removes
//! them. Ids are never reused so a late timer cannot remove a newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use catalog::{Notice, Severity};

/// One visible toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append `notice` and return the id of the new toast.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, severity: notice.severity, message: notice.message });
        id
    }

    /// Remove toast `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Class list for a toast, e.g. `toast toast--warning`.
pub fn toast_class(severity: Severity) -> String {
    format!("toast toast--{}", severity.as_str())
}
