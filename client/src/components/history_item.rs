//! One row of the profile activity history.

#[cfg(test)]
#[path = "history_item_test.rs"]
mod history_item_test;

use domain::{Donation, DonationStatus, Role};
use leptos::prelude::*;

use crate::util::datetime::history_date_label;

/// "Posted on: ..." for donors, "Claimed on: ..." for receivers. `None` when
/// the relevant timestamp is missing.
pub fn history_line(donation: &Donation, role: Role) -> Option<String> {
    match role {
        Role::Donor => donation.created_at.as_deref().map(|at| format!("Posted on: {}", history_date_label(at))),
        Role::Receiver => donation.updated_at.as_deref().map(|at| format!("Claimed on: {}", history_date_label(at))),
    }
}

fn status_class(status: DonationStatus) -> &'static str {
    match status {
        DonationStatus::Available => "status-chip status-chip--available",
        DonationStatus::Claimed => "status-chip status-chip--claimed",
        DonationStatus::Delivered => "status-chip status-chip--delivered",
        DonationStatus::Unknown => "status-chip",
    }
}

#[component]
pub fn HistoryItem(donation: Donation, role: Role) -> impl IntoView {
    let line = history_line(&donation, role);
    let chip = donation
        .status
        .label()
        .map(|label| view! { <span class=status_class(donation.status)>{label}</span> });

    view! {
        <li class="history-item">
            <div class="history-item__head">
                <span class="history-item__title">{donation.food_type}</span>
                {chip}
            </div>
            <p class="history-item__meta">{donation.quantity} " · " {donation.category}</p>
            {line.map(|line| view! { <p class="history-item__date">{line}</p> })}
        </li>
    }
}
