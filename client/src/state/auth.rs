//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards, the header, and every page that needs the bearer
//! token or role. Written only by `restore`, `login`, `register`, and
//! `logout`.
//!
//! DESIGN
//! ======
//! `AuthState` transitions are plain methods so they can be tested without a
//! reactive runtime. [`Auth`] is the context handle: the reactive state plus
//! the injected [`SessionStore`], with the async operations that talk to the
//! remote API.
//!
//! ```text
//! Restoring ──restore──> Authenticated | Anonymous
//! Anonymous | Failed ──login/register──> Pending ──ok──> Authenticated
//!                                               └─err─> Failed(message)
//! any ──logout──> Anonymous
//! ```

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use domain::{ApiError, LoginRequest, RegisterRequest, Role, Session};
use leptos::prelude::*;

use super::session_store::{SessionStore, SharedSessionStore};

/// Which request a `Pending` state is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOperation {
    Register,
    Login,
}

/// Auth lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Before the stored session has been read. Server rendering stays here.
    #[default]
    Restoring,
    Anonymous,
    Pending(AuthOperation),
    Authenticated(Session),
    /// Last register/login failed; holds the display message.
    Failed(String),
}

/// Loading/error flags derived from the status, for form rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthRequestState {
    pub is_loading: bool,
    pub is_error: bool,
    pub message: String,
}

/// Authentication state for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
}

impl AuthState {
    /// State after reading the session store at startup.
    #[must_use]
    pub fn restored(session: Option<Session>) -> Self {
        let status = session.map_or(AuthStatus::Anonymous, AuthStatus::Authenticated);
        Self { status }
    }

    /// Start a request. Clears any previous error.
    pub fn begin(&mut self, operation: AuthOperation) {
        self.status = AuthStatus::Pending(operation);
    }

    pub fn succeed(&mut self, session: Session) {
        self.status = AuthStatus::Authenticated(session);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = AuthStatus::Failed(message.into());
    }

    pub fn sign_out(&mut self) {
        self.status = AuthStatus::Anonymous;
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.status {
            AuthStatus::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    #[must_use]
    pub fn is_restoring(&self) -> bool {
        matches!(self.status, AuthStatus::Restoring)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn request_state(&self) -> AuthRequestState {
        match &self.status {
            AuthStatus::Pending(_) => AuthRequestState { is_loading: true, ..AuthRequestState::default() },
            AuthStatus::Failed(message) => AuthRequestState {
                is_loading: false,
                is_error: true,
                message: message.clone(),
            },
            _ => AuthRequestState::default(),
        }
    }
}

/// Read the store once and settle the startup state.
pub fn restore(store: &dyn SessionStore) -> AuthState {
    AuthState::restored(store.load())
}

/// Apply a register/login result: persist and authenticate on success,
/// record the message on failure. The result is handed back to the caller.
///
/// # Errors
///
/// Propagates the API failure unchanged.
pub fn complete(
    state: &mut AuthState,
    store: &dyn SessionStore,
    result: Result<Session, ApiError>,
) -> Result<Session, ApiError> {
    match result {
        Ok(session) => {
            store.save(&session);
            state.succeed(session.clone());
            Ok(session)
        }
        Err(err) => {
            state.fail(err.message());
            Err(err)
        }
    }
}

/// Drop the stored session and return to anonymous. Never fails.
pub fn sign_out(state: &mut AuthState, store: &dyn SessionStore) {
    store.clear();
    state.sign_out();
}

/// Auth context handle provided at the app root.
#[derive(Clone, Copy)]
pub struct Auth {
    pub state: RwSignal<AuthState>,
    store: StoredValue<SharedSessionStore>,
}

impl Auth {
    pub fn new(store: SharedSessionStore) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            store: StoredValue::new(store),
        }
    }

    /// Settle `Restoring` from the session store. Runs once, after hydration.
    pub fn restore(self) {
        if !self.state.get_untracked().is_restoring() {
            return;
        }
        let store = self.store.get_value();
        self.state.set(restore(store.as_ref()));
    }

    /// Register a new account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns the normalized API failure; the message is also kept in `Failed`.
    pub async fn register(self, request: RegisterRequest) -> Result<Session, ApiError> {
        self.state.update(|s| s.begin(AuthOperation::Register));
        let result = crate::net::api::register(&request).await;
        self.finish(result)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the normalized API failure; the message is also kept in `Failed`.
    pub async fn login(self, request: LoginRequest) -> Result<Session, ApiError> {
        self.state.update(|s| s.begin(AuthOperation::Login));
        let result = crate::net::api::login(&request).await;
        self.finish(result)
    }

    /// Clear the session synchronously. No network call.
    pub fn logout(self) {
        let store = self.store.get_value();
        self.state.update(|s| sign_out(s, store.as_ref()));
    }

    fn finish(self, result: Result<Session, ApiError>) -> Result<Session, ApiError> {
        let store = self.store.get_value();
        self.state
            .try_update(|s| complete(s, store.as_ref(), result))
            .unwrap_or_else(|| Err(ApiError::Network("auth state disposed".to_owned())))
    }
}
