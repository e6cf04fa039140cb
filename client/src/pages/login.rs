//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use domain::LoginRequest;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guard::GuestOnly;
use crate::state::auth::Auth;
use crate::state::toast::Toasts;

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter your email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let toasts = expect_context::<Toasts>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = move || auth.state.with(|s| s.request_state().is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                toasts.error(msg);
                return;
            }
        };
        // GuestOnly moves the now-authenticated user on to the map.
        leptos::task::spawn_local(async move {
            if let Err(err) = auth.login(request).await {
                toasts.error(err.message());
            }
        });
    };

    view! {
        <GuestOnly>
            <div class="auth-page">
                <div class="auth-card">
                    <h1>"Welcome Back"</h1>
                    <p class="auth-card__subtitle">"Log in to continue sharing food."</p>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Email"
                            <input
                                class="auth-form__input"
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                            {move || if busy() { "Logging in..." } else { "Log In" }}
                        </button>
                    </form>
                    <p class="auth-card__switch">
                        "Don't have an account? "
                        <A href="/register">"Sign up"</A>
                    </p>
                </div>
            </div>
        </GuestOnly>
    }
}
