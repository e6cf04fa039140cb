//! Transient user-visible notifications.
//!
//! Every view reports request outcomes here instead of rendering its own
//! error banner. Toasts auto-dismiss after [`TOAST_TTL_MS`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

pub const TOAST_TTL_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast { id: id.clone(), level, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}

/// Context handle for raising toasts.
#[derive(Clone, Copy)]
pub struct Toasts(pub RwSignal<ToastState>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastState::default()))
    }

    pub fn success(self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(self, id: &str) {
        self.0.update(|s| s.dismiss(id));
    }

    fn push(self, level: ToastLevel, message: String) {
        let Some(id) = self.0.try_update(|s| s.push(level, message)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || self.dismiss(&id)).forget();
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
