//! Site header with role-aware navigation.
//!
//! DESIGN
//! ======
//! The link set is a pure function of the current role so the desktop bar and
//! the mobile menu cannot drift apart.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use domain::{Capability, Role};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{Auth, AuthState};
use crate::util::auth::LOGIN_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Navigation for a signed-in `role`, or the guest links when `None`.
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    let Some(role) = role else {
        return vec![
            NavLink { href: "/login", label: "Log In" },
            NavLink { href: "/register", label: "Sign Up" },
        ];
    };
    let mut links = Vec::with_capacity(3);
    if role.can(Capability::CreateDonation) {
        links.push(NavLink { href: "/create-donation", label: "Post Donation" });
    }
    links.push(NavLink { href: "/donations", label: "View Map" });
    links.push(NavLink { href: "/profile", label: "Profile" });
    links
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let navigate = StoredValue::new_local(use_navigate());
    let menu_open = RwSignal::new(false);

    let role = move || auth.state.with(AuthState::role);
    let links = move || {
        nav_links(role())
            .into_iter()
            .map(|link| {
                view! {
                    <A href=link.href attr:class="site-header__link" on:click=move |_| menu_open.set(false)>
                        {link.label}
                    </A>
                }
            })
            .collect_view()
    };

    let logout = move || {
        auth.logout();
        menu_open.set(false);
        navigate.with_value(|navigate| navigate(LOGIN_PATH, NavigateOptions::default()));
    };

    view! {
        <header class="site-header">
            <nav class="site-header__bar">
                <A href="/" attr:class="site-header__brand">"FoodShare"</A>
                <div class="site-header__links">
                    {links}
                    <Show when=move || role().is_some()>
                        <span class="role-badge">{move || role().map(Role::as_str).unwrap_or_default()}</span>
                        <button class="btn site-header__logout" on:click=move |_| logout()>"Logout"</button>
                    </Show>
                </div>
                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="site-header__mobile">
                    {links}
                    <Show when=move || role().is_some()>
                        <button class="btn site-header__logout" on:click=move |_| logout()>"Logout"</button>
                    </Show>
                </div>
            </Show>
        </header>
    }
}
