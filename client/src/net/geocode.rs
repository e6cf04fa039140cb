//! Forward geocoding of a free-form address.
//!
//! Uses a Nominatim-compatible search endpoint (`q`, `format=json`,
//! `limit=1`). Nominatim returns coordinates as decimal strings; they are
//! parsed here and reordered to `[lon, lat]`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;

use domain::{ApiError, LonLat};
use serde::Deserialize;

/// One search hit. Only the coordinates are read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
}

fn not_found() -> ApiError {
    ApiError::NotFound("Address not found".to_owned())
}

/// Take the first hit and parse its coordinates.
///
/// # Errors
///
/// `NotFound` when there are no hits or the first hit has unparseable
/// coordinates.
pub fn parse_places(places: &[NominatimPlace]) -> Result<LonLat, ApiError> {
    let place = places.first().ok_or_else(not_found)?;
    let lon = place.lon.trim().parse::<f64>().map_err(|_| not_found())?;
    let lat = place.lat.trim().parse::<f64>().map_err(|_| not_found())?;
    if !lon.is_finite() || !lat.is_finite() {
        return Err(not_found());
    }
    Ok(LonLat { lon, lat })
}

/// Resolve `address` to coordinates.
///
/// # Errors
///
/// `Validation` for a blank address, `NotFound` when nothing matches,
/// otherwise the normalized network failure.
pub async fn geocode_address(address: &str) -> Result<LonLat, ApiError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ApiError::Validation("Please enter an address first.".to_owned()));
    }
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::config().geocoder_url();
        let resp = gloo_net::http::Request::get(url)
            .query([("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log::warn!("geocoder failed: {status}");
            return Err(ApiError::from_response(status, &body));
        }
        let places = resp.json::<Vec<NominatimPlace>>().await.map_err(ApiError::network)?;
        parse_places(&places)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
