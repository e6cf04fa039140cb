//! Donation records as exchanged with the REST API.
//!
//! DESIGN
//! ======
//! Locations are GeoJSON points, so coordinates travel as `[lon, lat]`.
//! `LonLat` keeps that order explicit in Rust while serializing to the same
//! two-element array, which lets a geocoded pair round-trip through the API
//! unchanged.

#[cfg(test)]
#[path = "donation_test.rs"]
mod donation_test;

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair, serialized as a GeoJSON `[lon, lat]` array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl From<[f64; 2]> for LonLat {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<LonLat> for [f64; 2] {
    fn from(value: LonLat) -> Self {
        [value.lon, value.lat]
    }
}

impl LonLat {
    /// Leaflet and most map APIs want `(lat, lon)`.
    #[must_use]
    pub fn lat_lon(self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// GeoJSON point with a human-readable address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type", default = "point_kind")]
    pub kind: String,
    pub coordinates: LonLat,
    #[serde(default)]
    pub address: String,
}

fn point_kind() -> String {
    "Point".to_owned()
}

impl Location {
    #[must_use]
    pub fn point(coordinates: LonLat, address: impl Into<String>) -> Self {
        Self { kind: point_kind(), coordinates, address: address.into() }
    }
}

/// Lifecycle of a donation: `available` → `claimed` → `delivered`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Available,
    Claimed,
    Delivered,
    /// Any status this client does not know how to display.
    #[serde(other)]
    Unknown,
}

impl DonationStatus {
    /// Chip label, or `None` for statuses that render no chip.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Available => Some("Available"),
            Self::Claimed => Some("Claimed"),
            Self::Delivered => Some("Delivered"),
            Self::Unknown => None,
        }
    }
}

/// A posted donation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub category: String,
    pub food_type: String,
    pub quantity: String,
    /// Expiry timestamp (ISO 8601).
    pub best_before: String,
    pub location: Location,
    #[serde(default)]
    pub status: DonationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Food categories offered by the create form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    CookedMeal,
    FreshProduce,
    Bakery,
    Dairy,
    PackagedGoods,
}

impl Category {
    pub const ALL: [Self; 5] =
        [Self::CookedMeal, Self::FreshProduce, Self::Bakery, Self::Dairy, Self::PackagedGoods];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CookedMeal => "Cooked Meal",
            Self::FreshProduce => "Fresh Produce",
            Self::Bakery => "Bakery",
            Self::Dairy => "Dairy",
            Self::PackagedGoods => "Packaged Goods",
        }
    }

    /// Inverse of [`Category::as_str`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Payload for `POST /api/donations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub category: String,
    pub food_type: String,
    pub quantity: String,
    pub best_before: String,
    pub location: Location,
}
