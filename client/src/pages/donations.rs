//! Map of available donations with the claim flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full available list on mount and again after every successful
//! claim. `?lon=..&lat=..` (set after posting a donation) centers the map on
//! that point.

#[cfg(test)]
#[path = "donations_test.rs"]
mod donations_test;

use domain::{Donation, LonLat};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::donation_card::{DonationCard, claim_button_state};
use crate::components::donation_map::DonationMap;
use crate::components::guard::RequireAuth;
use crate::net::api;
use crate::state::auth::{Auth, AuthState};
use crate::state::donations::DonationsState;
use crate::state::toast::Toasts;
use crate::util::leaflet::MapView;

/// Map focus from the `lon`/`lat` query values. Both must parse.
pub fn parse_focus(lon: Option<&str>, lat: Option<&str>) -> Option<LonLat> {
    let lon = lon?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let lat = lat?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(LonLat { lon, lat })
}

/// Link to the map centered on `point`.
pub fn focus_href(point: LonLat) -> String {
    format!("/donations?lon={}&lat={}", point.lon, point.lat)
}

/// The listed donations alone. Selection and claim changes leave it equal, so
/// the map's markers are only rebuilt when a fetch changes the list.
fn listed_donations(donations: RwSignal<DonationsState>) -> Memo<Vec<Donation>> {
    Memo::new(move |_| donations.with(|s| s.items.clone()))
}

fn refresh(donations: RwSignal<DonationsState>, toasts: Toasts) {
    donations.update(DonationsState::begin_fetch);
    leptos::task::spawn_local(async move {
        let result = api::list_available_donations().await;
        if result.is_err() {
            toasts.error("Could not fetch donations.");
        }
        donations.update(|s| s.apply_fetch(result));
    });
}

#[component]
pub fn DonationsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DonationsView/>
        </RequireAuth>
    }
}

#[component]
fn DonationsView() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let toasts = expect_context::<Toasts>();
    let donations = RwSignal::new(DonationsState::default());
    let query = use_query_map();

    let map_view = Signal::derive(move || {
        query.with(|q| MapView::focused(parse_focus(q.get_str("lon"), q.get_str("lat"))))
    });
    let items = listed_donations(donations);

    // Effects only run in the browser, once on mount here.
    Effect::new(move || refresh(donations, toasts));

    let on_select = Callback::new(move |id: String| donations.update(|s| s.select(Some(id))));

    let on_claim = Callback::new(move |id: String| {
        if donations.with_untracked(|s| s.claiming.is_some()) {
            return;
        }
        let session = auth.state.with_untracked(|s| s.session().cloned());
        donations.update(|s| s.claiming = Some(id.clone()));
        leptos::task::spawn_local(async move {
            let result = api::claim_donation(session.as_ref(), &id).await;
            donations.update(|s| s.claiming = None);
            match result {
                Ok(_) => {
                    toasts.success("Donation claimed successfully!");
                    refresh(donations, toasts);
                }
                Err(err) => toasts.error(err.message_or("Failed to claim donation.")),
            }
        });
    });

    let selected = move || donations.with(|s| s.selected_donation().cloned());

    view! {
        <div class="donations-page">
            <div class="donations-page__map">
                <DonationMap donations=items map_view=map_view on_select=on_select/>
                <Show when=move || donations.with(|s| s.loading)>
                    <div class="donations-page__loading">"Loading donations..."</div>
                </Show>
            </div>
            <aside class="donations-page__panel">
                <h2>"Available Donations"</h2>
                <p class="donations-page__count">
                    {move || format!("{} available", donations.with(|s| s.items.len()))}
                </p>
                {move || match selected() {
                    Some(donation) => {
                        let id = donation.id.clone();
                        let button = Signal::derive(move || {
                            let role = auth.state.with(AuthState::role);
                            claim_button_state(role, donations.with(|s| s.is_claiming(&id)))
                        });
                        view! { <DonationCard donation=donation button=button on_claim=on_claim/> }.into_any()
                    }
                    None => view! { <p class="donations-page__hint">"Select a marker to see details."</p> }.into_any(),
                }}
            </aside>
        </div>
    }
}
