//! Durable storage for the single active session.
//!
//! DESIGN
//! ======
//! The auth state machine owns the session; this trait is only where it is
//! kept between page loads. The browser implementation uses one
//! `localStorage` key. Tests inject [`MemorySessionStore`].

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use domain::Session;

use crate::util::storage;

/// `localStorage` key holding the serialized session.
pub const SESSION_KEY: &str = "user";

/// Persistence for the active session. Read once at startup, written on
/// login/register, deleted on logout.
pub trait SessionStore {
    /// The stored session, if one is present and complete.
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Shared handle injected into the auth context.
pub type SharedSessionStore = Arc<dyn SessionStore + Send + Sync>;

/// Session store backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = storage::load_raw(SESSION_KEY)?;
        let session = Session::from_json(&raw);
        if session.is_none() {
            // Partial or corrupt record: drop it so the next load is clean.
            storage::remove(SESSION_KEY);
        }
        session
    }

    fn save(&self, session: &Session) {
        storage::save_json(SESSION_KEY, session);
    }

    fn clear(&self) {
        storage::remove(SESSION_KEY);
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySessionStore {
    slot: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemorySessionStore {
    /// A store already holding `raw`, as if written by an earlier page load.
    pub(crate) fn with_raw(raw: &str) -> Self {
        Self { slot: std::sync::Mutex::new(Some(raw.to_owned())) }
    }

    pub(crate) fn raw(&self) -> Option<String> {
        self.slot.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        let raw = self.raw()?;
        let session = Session::from_json(&raw);
        if session.is_none() {
            self.clear();
        }
        session
    }

    fn save(&self, session: &Session) {
        if let (Ok(mut slot), Ok(raw)) = (self.slot.lock(), serde_json::to_string(session)) {
            *slot = Some(raw);
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
