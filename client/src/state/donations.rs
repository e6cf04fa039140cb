//! Available-donation list backing the map page.
//!
//! DESIGN
//! ======
//! The list is only ever replaced wholesale by a fetch. A successful claim
//! triggers a full refetch rather than removing the item locally, so what the
//! map shows is always a server snapshot.

#[cfg(test)]
#[path = "donations_test.rs"]
mod donations_test;

use domain::{ApiError, Donation};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonationsState {
    pub items: Vec<Donation>,
    pub loading: bool,
    /// Marker the user opened, by donation id.
    pub selected: Option<String>,
    /// Donation with a claim request in flight.
    pub claiming: Option<String>,
    pub error: Option<String>,
}

impl DonationsState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the list with a fetch result. A failed fetch keeps the last
    /// snapshot on screen.
    pub fn apply_fetch(&mut self, result: Result<Vec<Donation>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                let still_listed = self
                    .selected
                    .as_ref()
                    .is_some_and(|id| self.items.iter().any(|d| &d.id == id));
                if !still_listed {
                    self.selected = None;
                }
            }
            Err(err) => self.error = Some(err.message().to_owned()),
        }
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    #[must_use]
    pub fn selected_donation(&self) -> Option<&Donation> {
        let id = self.selected.as_ref()?;
        self.items.iter().find(|d| &d.id == id)
    }

    #[must_use]
    pub fn is_claiming(&self, id: &str) -> bool {
        self.claiming.as_deref() == Some(id)
    }
}
