//! Fixed-position stack of active toasts.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, Toasts};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || toasts.0.get().items key=|toast| toast.id.clone() let:toast>
                <div
                    class="toast"
                    class:toast--success=toast.level == ToastLevel::Success
                    class:toast--error=toast.level == ToastLevel::Error
                    title="Click to dismiss"
                    on:click={
                        let id = toast.id.clone();
                        move |_| toasts.dismiss(&id)
                    }
                >
                    <span class="toast__message">{toast.message.clone()}</span>
                    // Clicks bubble to the toast itself.
                    <button class="toast__dismiss" aria-label="Dismiss">"✕"</button>
                </div>
            </For>
        </div>
    }
}
