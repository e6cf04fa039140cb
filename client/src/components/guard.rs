//! Route guard wrappers.
//!
//! `RequireAuth` wraps protected routes; `GuestOnly` wraps login/register.
//! Both render a placeholder until the stored session has been read, then
//! either render their children or navigate away.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{Auth, AuthState};
use crate::util::auth::{GuardDecision, guard_decision, guest_decision, install_guard_redirect};

fn guarded(decide: fn(&AuthState) -> GuardDecision, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<Auth>();
    install_guard_redirect(auth.state, decide, use_navigate());
    let decision = move || auth.state.with(decide);

    view! {
        <Show
            when=move || decision() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="page-status">
                        <p>
                            {move || match decision() {
                                GuardDecision::Wait => "Loading...",
                                _ => "Redirecting...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Render `children` only for an authenticated session; otherwise go to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(guard_decision, children)
}

/// Render `children` only for guests; a signed-in user goes to `/donations`.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    guarded(guest_decision, children)
}
