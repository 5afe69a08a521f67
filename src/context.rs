//! Application Context
//!
//! Shared state provided via Leptos Context API. Carries the notification
//! surface: any component can request a toast; `ToastHost` renders it.

use leptos::prelude::*;

/// Visual flavor of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One ephemeral notification. At most one is on screen at a time; a newer
/// toast replaces the current one immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Generation id; timer callbacks check it before detaching anything
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
    /// Auto-dismiss delay
    pub timeout_ms: u32,
}

/// Auto-dismiss delay for generic notifications
pub const NOTIFY_TIMEOUT_MS: u32 = 3000;
/// Auto-dismiss delay for contact form outcomes
pub const CONTACT_TIMEOUT_MS: u32 = 5000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
    toast_seq: ReadSignal<u32>,
    set_toast_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
        toast_seq: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
            toast_seq: toast_seq.0,
            set_toast_seq: toast_seq.1,
        }
    }

    fn show(&self, kind: ToastKind, message: String, timeout_ms: u32) {
        let id = self.toast_seq.get_untracked() + 1;
        self.set_toast_seq.set(id);
        self.set_toast.set(Some(Toast {
            id,
            kind,
            message,
            timeout_ms,
        }));
    }

    /// Show a generic notification (3s auto-dismiss)
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        self.show(kind, message.into(), NOTIFY_TIMEOUT_MS);
    }

    /// Show a contact form outcome (5s auto-dismiss)
    pub fn contact_message(&self, kind: ToastKind, message: impl Into<String>) {
        self.show(kind, message.into(), CONTACT_TIMEOUT_MS);
    }

    /// Remove the toast with `id`, if it is still the one on screen
    pub fn dismiss(&self, id: u32) {
        if self.toast.get_untracked().is_some_and(|t| t.id == id) {
            self.set_toast.set(None);
        }
    }
}
