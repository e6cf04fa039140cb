//! Account registration with a donor/receiver role toggle.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use domain::{ApiError, RegisterRequest, Role};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guard::GuestOnly;
use crate::state::auth::Auth;
use crate::state::toast::Toasts;

/// Raw form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirm: String,
    role: Role,
}

/// Checked before any request is sent.
fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, ApiError> {
    if form.password != form.confirm {
        return Err(ApiError::Validation("Passwords do not match".to_owned()));
    }
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(ApiError::Validation("Please fill in all fields.".to_owned()));
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role: form.role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let toasts = expect_context::<Toasts>();
    let form = RwSignal::new(RegisterForm::default());
    let busy = move || auth.state.with(|s| s.request_state().is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let request = match form.with(validate_register_input) {
            Ok(request) => request,
            Err(err) => {
                toasts.error(err.message());
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match auth.register(request).await {
                Ok(_) => toasts.success("Registration successful! Welcome."),
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    let role_button = move |role: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class="role-toggle__option"
                class:role-toggle__option--active=move || form.with(|f| f.role == role)
                on:click=move |_| form.update(|f| f.role = role)
            >
                {label}
            </button>
        }
    };

    view! {
        <GuestOnly>
            <div class="auth-page">
                <div class="auth-card">
                    <h1>"Create an Account"</h1>
                    <p class="auth-card__subtitle">"Join the community fighting food waste."</p>
                    <form class="auth-form" on:submit=on_submit>
                        <div class="role-toggle">
                            {role_button(Role::Donor, "I want to Donate")}
                            {role_button(Role::Receiver, "I want to Receive")}
                        </div>
                        <label class="auth-form__label">
                            "Name"
                            <input
                                class="auth-form__input"
                                type="text"
                                required
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Email"
                            <input
                                class="auth-form__input"
                                type="email"
                                required
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                required
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Confirm Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                required
                                prop:value=move || form.with(|f| f.confirm.clone())
                                on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                            {move || if busy() { "Creating account..." } else { "Sign Up" }}
                        </button>
                    </form>
                    <p class="auth-card__switch">
                        "Already have an account? "
                        <A href="/login">"Log in"</A>
                    </p>
                </div>
            </div>
        </GuestOnly>
    }
}
