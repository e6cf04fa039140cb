//! Details panel for the donation selected on the map.

#[cfg(test)]
#[path = "donation_card_test.rs"]
mod donation_card_test;

use domain::{Capability, Donation, Role};
use leptos::prelude::*;

use crate::util::datetime::best_before_label;

/// Claim action for the current viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimButton {
    Claim,
    Claiming,
    /// Viewer cannot claim (not a receiver).
    LoginAsReceiver,
}

impl ClaimButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Claim => "Claim Donation",
            Self::Claiming => "Claiming...",
            Self::LoginAsReceiver => "Login as Receiver to Claim",
        }
    }

    pub fn enabled(self) -> bool {
        self == Self::Claim
    }
}

pub fn claim_button_state(role: Option<Role>, claiming: bool) -> ClaimButton {
    if !role.is_some_and(|r| r.can(Capability::ClaimDonation)) {
        ClaimButton::LoginAsReceiver
    } else if claiming {
        ClaimButton::Claiming
    } else {
        ClaimButton::Claim
    }
}

#[component]
pub fn DonationCard(
    donation: Donation,
    #[prop(into)] button: Signal<ClaimButton>,
    on_claim: Callback<String>,
) -> impl IntoView {
    let id = donation.id.clone();
    let expires = best_before_label(&donation.best_before);

    view! {
        <article class="donation-card">
            <h3 class="donation-card__title">{donation.food_type}</h3>
            <dl class="donation-card__facts">
                <dt>"Category"</dt>
                <dd>{donation.category}</dd>
                <dt>"Quantity"</dt>
                <dd>{donation.quantity}</dd>
                <dt>"Address"</dt>
                <dd>{donation.location.address}</dd>
                <dt>"Expires"</dt>
                <dd>{expires}</dd>
            </dl>
            <button
                class="btn btn--primary donation-card__claim"
                disabled=move || !button.get().enabled()
                on:click=move |_| on_claim.run(id.clone())
            >
                {move || button.get().label()}
            </button>
        </article>
    }
}
