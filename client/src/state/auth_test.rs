use super::*;
use crate::state::session_store::MemorySessionStore;

fn server_session(role: Role) -> Session {
    Session {
        id: "65f0c0ffee".to_owned(),
        name: "Kiran".to_owned(),
        email: "kiran@example.com".to_owned(),
        role,
        token: "jwt-abc".to_owned(),
    }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn auth_state_default_is_restoring() {
    let state = AuthState::default();
    assert!(state.is_restoring());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_with_stored_session_is_authenticated() {
    let store = MemorySessionStore::default();
    store.save(&server_session(Role::Donor));
    let state = restore(&store);
    assert_eq!(state.session(), Some(&server_session(Role::Donor)));
}

#[test]
fn restore_without_stored_session_is_anonymous() {
    let state = restore(&MemorySessionStore::default());
    assert_eq!(state.status, AuthStatus::Anonymous);
}

// =============================================================
// Login / register
// =============================================================

#[test]
fn login_success_exposes_server_identity_and_persists_it() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::restored(None);
    state.begin(AuthOperation::Login);
    assert!(state.request_state().is_loading);

    let returned = complete(&mut state, &store, Ok(server_session(Role::Receiver))).unwrap();

    assert_eq!(returned, server_session(Role::Receiver));
    let current = state.session().expect("authenticated");
    assert_eq!(current.id, "65f0c0ffee");
    assert_eq!(current.role, Role::Receiver);
    assert_eq!(state.token(), Some("jwt-abc"));
    assert_eq!(store.load(), Some(server_session(Role::Receiver)));
}

#[test]
fn failure_records_message_and_propagates_error() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::restored(None);
    state.begin(AuthOperation::Register);

    let err = ApiError::from_response(400, r#"{"msg":"User already exists"}"#);
    let result = complete(&mut state, &store, Err(err.clone()));

    assert_eq!(result, Err(err));
    assert_eq!(state.status, AuthStatus::Failed("User already exists".to_owned()));
    let flags = state.request_state();
    assert!(flags.is_error);
    assert!(!flags.is_loading);
    assert_eq!(flags.message, "User already exists");
    assert!(store.load().is_none());
}

#[test]
fn begin_resets_previous_error() {
    let mut state = AuthState::default();
    state.fail("bad password");
    state.begin(AuthOperation::Login);
    assert_eq!(state.request_state(), AuthRequestState { is_loading: true, is_error: false, message: String::new() });
}

#[test]
fn pending_and_failed_are_not_authenticated() {
    let mut state = AuthState::default();
    state.begin(AuthOperation::Login);
    assert!(!state.is_authenticated());
    state.fail("nope");
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_state_and_store_from_any_state() {
    let starts = [
        AuthState::restored(Some(server_session(Role::Donor))),
        AuthState::default(),
        AuthState { status: AuthStatus::Failed("x".to_owned()) },
        AuthState { status: AuthStatus::Pending(AuthOperation::Login) },
    ];
    for mut state in starts {
        let store = MemorySessionStore::default();
        store.save(&server_session(Role::Donor));
        sign_out(&mut state, &store);
        assert_eq!(state.status, AuthStatus::Anonymous);
        assert!(store.load().is_none());
    }
}

// =============================================================
// Context handle
// =============================================================

fn handle(store: &std::sync::Arc<MemorySessionStore>) -> Auth {
    let shared: SharedSessionStore = store.clone();
    Auth::new(shared)
}

#[test]
fn handle_restore_settles_from_store() {
    let store = std::sync::Arc::new(MemorySessionStore::default());
    store.save(&server_session(Role::Receiver));
    let auth = handle(&store);
    assert!(auth.state.get_untracked().is_restoring());

    auth.restore();

    assert_eq!(auth.state.get_untracked().session(), Some(&server_session(Role::Receiver)));
}

#[test]
fn handle_restore_reads_store_only_once() {
    let store = std::sync::Arc::new(MemorySessionStore::default());
    let auth = handle(&store);
    auth.restore();
    assert_eq!(auth.state.get_untracked().status, AuthStatus::Anonymous);

    store.save(&server_session(Role::Donor));
    auth.restore();

    assert_eq!(auth.state.get_untracked().status, AuthStatus::Anonymous);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn handle_login_failure_lands_in_failed_and_keeps_store_empty() {
    let store = std::sync::Arc::new(MemorySessionStore::default());
    let auth = handle(&store);
    auth.restore();

    let request = LoginRequest { email: "kiran@example.com".to_owned(), password: "pw".to_owned() };
    let result = futures::executor::block_on(auth.login(request));

    assert_eq!(result, Err(ApiError::Network("not available on server".to_owned())));
    assert_eq!(auth.state.get_untracked().status, AuthStatus::Failed("not available on server".to_owned()));
    assert!(store.raw().is_none());

    // A failed attempt is past startup; the store is not consulted again.
    store.save(&server_session(Role::Donor));
    auth.restore();
    assert!(matches!(auth.state.get_untracked().status, AuthStatus::Failed(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn handle_register_failure_lands_in_failed() {
    let store = std::sync::Arc::new(MemorySessionStore::default());
    let auth = handle(&store);
    auth.restore();

    let request = RegisterRequest {
        name: "Kiran".to_owned(),
        email: "kiran@example.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::Donor,
    };
    assert!(futures::executor::block_on(auth.register(request)).is_err());
    assert!(auth.state.get_untracked().request_state().is_error);
}

#[test]
fn handle_logout_clears_injected_store() {
    let store = std::sync::Arc::new(MemorySessionStore::default());
    store.save(&server_session(Role::Donor));
    let auth = handle(&store);
    auth.restore();
    assert!(auth.state.get_untracked().is_authenticated());

    auth.logout();

    assert_eq!(auth.state.get_untracked().status, AuthStatus::Anonymous);
    assert!(store.raw().is_none());
}
