use super::*;

#[test]
fn parse_focus_reads_both_coordinates() {
    assert_eq!(parse_focus(Some("86.2029"), Some("22.8046")), Some(LonLat { lon: 86.2029, lat: 22.8046 }));
}

#[test]
fn parse_focus_requires_both_values() {
    assert_eq!(parse_focus(Some("86.2"), None), None);
    assert_eq!(parse_focus(None, Some("22.8")), None);
    assert_eq!(parse_focus(Some("east"), Some("22.8")), None);
}

#[test]
fn focus_href_round_trips_through_parse_focus() {
    let point = LonLat { lon: -122.084, lat: 37.422 };
    let href = focus_href(point);
    assert_eq!(href, "/donations?lon=-122.084&lat=37.422");
    let query = href.split_once('?').map(|(_, q)| q).unwrap_or_default();
    let mut lon = None;
    let mut lat = None;
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("lon", v)) => lon = Some(v),
            Some(("lat", v)) => lat = Some(v),
            _ => {}
        }
    }
    assert_eq!(parse_focus(lon, lat), Some(point));
}

mod listed {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use domain::{Donation, DonationStatus, Location};
    use leptos::prelude::*;

    use super::super::listed_donations;
    use crate::state::donations::DonationsState;

    fn donation(id: &str) -> Donation {
        Donation {
            id: id.to_owned(),
            category: "Bakery".to_owned(),
            food_type: "Buns".to_owned(),
            quantity: "20".to_owned(),
            best_before: "2025-03-01T18:30:00.000Z".to_owned(),
            location: Location::point(domain::LonLat { lon: 86.2, lat: 22.8 }, "Bistupur"),
            status: DonationStatus::Available,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn selection_and_claim_changes_do_not_rebuild_markers() {
        let donations = RwSignal::new(DonationsState::default());
        donations.update(|s| s.apply_fetch(Ok(vec![donation("41"), donation("42")])));
        let items = listed_donations(donations);

        let rebuilds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&rebuilds);
        let markers = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            items.with(Vec::len)
        });

        assert_eq!(markers.get_untracked(), 2);
        donations.update(|s| s.select(Some("42".to_owned())));
        donations.update(|s| s.claiming = Some("42".to_owned()));
        assert_eq!(markers.get_untracked(), 2);
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);

        donations.update(|s| s.apply_fetch(Ok(vec![donation("41")])));
        assert_eq!(markers.get_untracked(), 1);
        assert_eq!(rebuilds.load(Ordering::SeqCst), 2);
    }
}
