use super::*;
use domain::{DonationStatus, Location};

fn donation(id: &str, lon: f64, lat: f64) -> Donation {
    Donation {
        id: id.to_owned(),
        category: "Bakery".to_owned(),
        food_type: "Bread".to_owned(),
        quantity: "10 loaves".to_owned(),
        best_before: "2025-03-01T18:30:00.000Z".to_owned(),
        location: Location::point(LonLat { lon, lat }, "Main St"),
        status: DonationStatus::Available,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn default_view_is_city_center() {
    assert_eq!(MapView::focused(None), MapView { center: (22.8046, 86.2029), zoom: 13 });
}

#[test]
fn focused_view_swaps_to_lat_lon_and_zooms_in() {
    let view = MapView::focused(Some(LonLat { lon: 86.1, lat: 22.7 }));
    assert_eq!(view, MapView { center: (22.7, 86.1), zoom: 15 });
}

#[test]
fn marker_points_use_lat_lon_order() {
    let points = marker_points(&[donation("d1", 86.2, 22.8)]);
    assert_eq!(points, vec![MarkerPoint { id: "d1".to_owned(), lat: 22.8, lon: 86.2 }]);
}

#[test]
fn marker_points_skip_non_finite_coordinates() {
    let points = marker_points(&[donation("bad", f64::NAN, 22.8), donation("ok", 86.2, 22.8)]);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].id, "ok");
}
