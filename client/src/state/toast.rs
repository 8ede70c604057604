//! Transient notifications raised by form controllers.
//!
//! DESIGN
//! ======
//! Controllers emit `Notification` values into a sink closure; the page owns
//! a `ToastState` signal and pushes into it. Validation failures never come
//! through here, they stay inline under their field.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use serde::Serialize;

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single `{ kind, text }` notification event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, text: text.into() }
    }
}

/// A notification queued for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notification and return the id assigned to it.
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
