//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login/register pages apply the same rules, so the
//! decision is a pure function of `AuthState` and the redirect is installed
//! by one helper.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/donations";

/// What a guarded view should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not read yet; render a placeholder.
    Wait,
    Allow,
    Redirect(&'static str),
}

/// Protected routes: only an authenticated session gets through.
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.is_restoring() {
        GuardDecision::Wait
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Login/register: a signed-in user is sent on to the map.
pub fn guest_decision(state: &AuthState) -> GuardDecision {
    if state.is_restoring() {
        GuardDecision::Wait
    } else if state.is_authenticated() {
        GuardDecision::Redirect(HOME_PATH)
    } else {
        GuardDecision::Allow
    }
}

/// Navigate away whenever `decide` says so. Re-runs on every auth change, so
/// logging out revokes a protected view without a reload.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, decide: fn(&AuthState) -> GuardDecision, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = auth.with(decide) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
