//! Build-time client configuration.
//!
//! Values are baked in at compile time from environment variables so the WASM
//! bundle needs no runtime config fetch:
//!
//! - `FOODSHARE_API_URL`: REST API origin (default `http://localhost:5000`)
//! - `FOODSHARE_GEOCODER_URL`: forward-geocoding search endpoint
//!   (default Nominatim)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::LazyLock;

use domain::Role;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Endpoint roots for the remote collaborators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
    geocoder_url: String,
}

static CONFIG: LazyLock<ClientConfig> = LazyLock::new(ClientConfig::from_env);

/// Process-wide configuration.
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base_url: &str, geocoder_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_owned(),
            geocoder_url: geocoder_url.trim().to_owned(),
        }
    }

    fn from_env() -> Self {
        Self::new(
            option_env!("FOODSHARE_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("FOODSHARE_GEOCODER_URL").unwrap_or(DEFAULT_GEOCODER_URL),
        )
    }

    #[must_use]
    pub fn geocoder_url(&self) -> &str {
        &self.geocoder_url
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}/api/users/register", self.api_base_url)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/api/users/login", self.api_base_url)
    }

    /// `GET` lists available donations, `POST` creates one.
    #[must_use]
    pub fn donations_url(&self) -> String {
        format!("{}/api/donations", self.api_base_url)
    }

    #[must_use]
    pub fn claim_url(&self, donation_id: &str) -> String {
        format!("{}/api/donations/{donation_id}/claim", self.api_base_url)
    }

    /// Role-scoped history: donors see what they posted, receivers what they claimed.
    #[must_use]
    pub fn history_url(&self, role: Role) -> String {
        let leaf = match role {
            Role::Donor => "mydonations",
            Role::Receiver => "myclaims",
        };
        format!("{}/api/donations/{leaf}", self.api_base_url)
    }
}
