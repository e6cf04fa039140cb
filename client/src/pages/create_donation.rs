//! Donor form for posting a donation.
//!
//! DESIGN
//! ======
//! The address must be geocoded ("Find") before posting. Editing the address
//! drops the located point so a stale pin can never be submitted.

#[cfg(test)]
#[path = "create_donation_test.rs"]
mod create_donation_test;

use domain::{ApiError, Capability, Category, Location, LonLat, NewDonation};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guard::RequireAuth;
use crate::net::{api, geocode};
use crate::pages::donations::focus_href;
use crate::state::auth::Auth;
use crate::state::toast::Toasts;

const NOT_LOCATED: &str = "Please locate the address on the map before posting.";

#[derive(Clone, Debug, Default, PartialEq)]
struct DonationDraft {
    category: Category,
    food_type: String,
    quantity: String,
    /// Raw `datetime-local` value.
    best_before: String,
    address: String,
    located: Option<LonLat>,
}

impl DonationDraft {
    fn set_address(&mut self, address: String) {
        if address != self.address {
            self.located = None;
        }
        self.address = address;
    }

    /// Pin `point` if `address` is still the one being edited. Returns whether
    /// it was applied.
    fn apply_located(&mut self, address: &str, point: LonLat) -> bool {
        if self.address != address {
            return false;
        }
        self.located = Some(point);
        true
    }

    fn into_payload(self) -> Result<NewDonation, ApiError> {
        let Some(coordinates) = self.located else {
            return Err(ApiError::Validation(NOT_LOCATED.to_owned()));
        };
        let food_type = self.food_type.trim();
        let quantity = self.quantity.trim();
        let best_before = self.best_before.trim();
        if food_type.is_empty() || quantity.is_empty() || best_before.is_empty() {
            return Err(ApiError::Validation("Please fill in all fields.".to_owned()));
        }
        Ok(NewDonation {
            category: self.category.as_str().to_owned(),
            food_type: food_type.to_owned(),
            quantity: quantity.to_owned(),
            best_before: best_before.to_owned(),
            location: Location::point(coordinates, self.address.trim()),
        })
    }
}

/// Toast text for a failed lookup.
fn geocode_failure_message(err: &ApiError) -> &str {
    match err {
        ApiError::Validation(msg) => msg,
        _ => "Could not find location. Please check the address.",
    }
}

#[component]
pub fn CreateDonationPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <CreateDonationForm/>
        </RequireAuth>
    }
}

#[component]
fn CreateDonationForm() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let toasts = expect_context::<Toasts>();
    let navigate = StoredValue::new_local(use_navigate());
    let draft = RwSignal::new(DonationDraft::default());
    let locating = RwSignal::new(false);
    let posting = RwSignal::new(false);

    let can_post = move || auth.state.with(|s| s.role().is_some_and(|r| r.can(Capability::CreateDonation)));

    let on_find = move |_| {
        if locating.get() {
            return;
        }
        let address = draft.with(|d| d.address.clone());
        locating.set(true);
        leptos::task::spawn_local(async move {
            match geocode::geocode_address(&address).await {
                Ok(point) => {
                    if draft.try_update(|d| d.apply_located(&address, point)).unwrap_or(false) {
                        toasts.success("Address located successfully!");
                    }
                }
                Err(err) => toasts.error(geocode_failure_message(&err)),
            }
            locating.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if posting.get() {
            return;
        }
        let payload = match draft.get().into_payload() {
            Ok(payload) => payload,
            Err(err) => {
                toasts.error(err.message());
                return;
            }
        };
        let session = auth.state.with_untracked(|s| s.session().cloned());
        posting.set(true);
        leptos::task::spawn_local(async move {
            let result = api::create_donation(session.as_ref(), &payload).await;
            posting.set(false);
            match result {
                Ok(created) => {
                    toasts.success("Donation posted successfully!");
                    let href = focus_href(created.location.coordinates);
                    navigate.with_value(|navigate| navigate(&href, NavigateOptions::default()));
                }
                Err(err) => toasts.error(err.message_or("Failed to post donation.")),
            }
        });
    };

    view! {
        <div class="create-page">
            <Show
                when=can_post
                fallback=|| view! { <p class="page-status">"Only donors can post donations."</p> }
            >
                <form class="create-form" on:submit=on_submit>
                    <h1>"Post a Donation"</h1>
                    <label class="create-form__label">
                        "Category"
                        <select
                            class="create-form__input"
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                draft.update(|d| d.category = Category::parse(&raw).unwrap_or_default());
                            }
                        >
                            {Category::ALL
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <option value=c.as_str() selected=move || draft.with(|d| d.category == c)>
                                            {c.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="create-form__label">
                        "Food Type"
                        <input
                            class="create-form__input"
                            type="text"
                            placeholder="e.g. Vegetable biryani"
                            required
                            prop:value=move || draft.with(|d| d.food_type.clone())
                            on:input=move |ev| draft.update(|d| d.food_type = event_target_value(&ev))
                        />
                    </label>
                    <label class="create-form__label">
                        "Quantity"
                        <input
                            class="create-form__input"
                            type="text"
                            placeholder="e.g. Serves 10 people"
                            required
                            prop:value=move || draft.with(|d| d.quantity.clone())
                            on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                        />
                    </label>
                    <label class="create-form__label">
                        "Best Before"
                        <input
                            class="create-form__input"
                            type="datetime-local"
                            required
                            prop:value=move || draft.with(|d| d.best_before.clone())
                            on:input=move |ev| draft.update(|d| d.best_before = event_target_value(&ev))
                        />
                    </label>
                    <label class="create-form__label">
                        "Pickup Address"
                        <div class="create-form__address">
                            <input
                                class="create-form__input"
                                type="text"
                                required
                                prop:value=move || draft.with(|d| d.address.clone())
                                on:input=move |ev| draft.update(|d| d.set_address(event_target_value(&ev)))
                            />
                            <button class="btn" type="button" on:click=on_find disabled=move || locating.get()>
                                {move || if locating.get() { "Finding..." } else { "Find" }}
                            </button>
                        </div>
                    </label>
                    <p class="create-form__located">
                        {move || {
                            draft
                                .with(|d| d.located)
                                .map_or_else(
                                    || "Address not located yet.".to_owned(),
                                    |p| format!("Located at {:.5}, {:.5}", p.lat, p.lon),
                                )
                        }}
                    </p>
                    <button class="btn btn--primary" type="submit" disabled=move || posting.get()>
                        {move || if posting.get() { "Posting..." } else { "Post Donation" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
