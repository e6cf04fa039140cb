//! Signed-in user's details and activity history.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use domain::{Donation, Role, Session};
use leptos::prelude::*;

use crate::components::guard::RequireAuth;
use crate::components::history_item::HistoryItem;
use crate::net::api;
use crate::state::auth::Auth;
use crate::state::toast::Toasts;

fn impact_label(role: Role) -> &'static str {
    match role {
        Role::Donor => "Total Donations Made",
        Role::Receiver => "Total Donations Received",
    }
}

fn history_heading(role: Role) -> &'static str {
    match role {
        Role::Donor => "My Donation History",
        Role::Receiver => "My Claim History",
    }
}

fn empty_history_text(role: Role) -> &'static str {
    match role {
        Role::Donor => "You haven't posted any donations yet.",
        Role::Receiver => "You haven't claimed any donations yet.",
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    view! {
        <RequireAuth>
            {move || auth.state.with(|s| s.session().cloned()).map(|session| view! { <ProfileView session=session/> })}
        </RequireAuth>
    }
}

#[component]
fn ProfileView(session: Session) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let history = RwSignal::new(Vec::<Donation>::new());
    let loading = RwSignal::new(true);
    let role = session.role;

    let fetch_session = session.clone();
    Effect::new(move || {
        let session = fetch_session.clone();
        leptos::task::spawn_local(async move {
            match api::list_history(&session).await {
                Ok(items) => history.set(items),
                Err(_) => toasts.error("Could not fetch your activity history."),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="profile-page">
            <section class="profile-card">
                <h1 class="profile-card__name">{session.name}</h1>
                <p class="profile-card__email">{session.email}</p>
                <span class="role-badge">{role.as_str()}</span>
            </section>
            <section class="impact-card">
                <span class="impact-card__count">{move || history.with(Vec::len)}</span>
                <span class="impact-card__label">{impact_label(role)}</span>
            </section>
            <section class="history">
                <h2>{history_heading(role)}</h2>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading history..."</p> }>
                    <Show
                        when=move || history.with(|h| !h.is_empty())
                        fallback=move || view! { <p class="history__empty">{empty_history_text(role)}</p> }
                    >
                        <ul class="history__list">
                            <For each=move || history.get() key=|d| d.id.clone() let:donation>
                                <HistoryItem donation=donation role=role/>
                            </For>
                        </ul>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
