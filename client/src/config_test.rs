use super::*;

fn cfg() -> ClientConfig {
    ClientConfig::new("https://api.example.org/", DEFAULT_GEOCODER_URL)
}

#[test]
fn new_trims_trailing_slash_from_api_base() {
    assert_eq!(cfg().donations_url(), "https://api.example.org/api/donations");
}

#[test]
fn auth_endpoints_live_under_users() {
    assert_eq!(cfg().register_url(), "https://api.example.org/api/users/register");
    assert_eq!(cfg().login_url(), "https://api.example.org/api/users/login");
}

#[test]
fn claim_url_embeds_donation_id() {
    assert_eq!(cfg().claim_url("42"), "https://api.example.org/api/donations/42/claim");
}

#[test]
fn history_url_depends_on_role() {
    assert_eq!(cfg().history_url(Role::Donor), "https://api.example.org/api/donations/mydonations");
    assert_eq!(cfg().history_url(Role::Receiver), "https://api.example.org/api/donations/myclaims");
}

#[test]
fn default_config_points_at_local_api_and_nominatim() {
    let c = ClientConfig::new(DEFAULT_API_URL, DEFAULT_GEOCODER_URL);
    assert_eq!(c.login_url(), "http://localhost:5000/api/users/login");
    assert_eq!(c.geocoder_url(), "https://nominatim.openstreetmap.org/search");
}
