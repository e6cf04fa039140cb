use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn probe_routes_builds() {
    let _router: Router = probe_routes();
}

#[test]
fn router_error_display_prefixes_source() {
    let err = RouterError::LeptosConfig("missing site-root".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing site-root");
}
