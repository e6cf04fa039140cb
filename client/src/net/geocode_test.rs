use super::*;
use futures::executor::block_on;

fn place(lat: &str, lon: &str) -> NominatimPlace {
    NominatimPlace { lat: lat.to_owned(), lon: lon.to_owned() }
}

#[test]
fn parse_places_reorders_to_lon_lat() {
    let hit = parse_places(&[place("22.8046", "86.2029"), place("0", "0")]).unwrap();
    assert!((hit.lon - 86.2029).abs() < 1e-9);
    assert!((hit.lat - 22.8046).abs() < 1e-9);
}

#[test]
fn parse_places_empty_is_not_found() {
    assert_eq!(parse_places(&[]), Err(ApiError::NotFound("Address not found".to_owned())));
}

#[test]
fn parse_places_rejects_garbage_coordinates() {
    assert!(matches!(parse_places(&[place("north", "86.2")]), Err(ApiError::NotFound(_))));
}

#[test]
fn nominatim_payload_decodes_string_coordinates() {
    let raw = r#"[{"place_id":1,"lat":"51.5","lon":"-0.12","display_name":"London"}]"#;
    let places: Vec<NominatimPlace> = serde_json::from_str(raw).unwrap();
    assert_eq!(places, vec![place("51.5", "-0.12")]);
}

#[test]
fn blank_address_is_rejected_before_lookup() {
    let err = block_on(geocode_address("   ")).unwrap_err();
    assert_eq!(err, ApiError::Validation("Please enter an address first.".to_owned()));
}
