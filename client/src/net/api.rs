//! REST API helpers for the donation marketplace.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the role and token checks still run, then the call
//! fails with `ApiError::Network` since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Non-2xx responses are
//! normalized by `ApiError::from_response`; transport and decode failures
//! become `ApiError::Network`. Role checks run before any request is built,
//! so a forbidden call never reaches the network. No retries, no caching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use domain::role::{self, Capability};
use domain::{ApiError, Donation, LoginRequest, NewDonation, RegisterRequest, Role, Session};

#[cfg(feature = "hydrate")]
use crate::config::config;

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Reject a server session record that is missing identity or token.
#[cfg(any(test, feature = "hydrate"))]
fn ensure_complete(session: Session) -> Result<Session, ApiError> {
    if session.is_complete() {
        Ok(session)
    } else {
        Err(ApiError::Server { status: 200, message: "incomplete session in response".to_owned() })
    }
}

fn require_id(donation_id: &str) -> Result<&str, ApiError> {
    let id = donation_id.trim();
    if id.is_empty() {
        return Err(ApiError::Validation("missing donation id".to_owned()));
    }
    Ok(id)
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = request.map_err(ApiError::network)?.send().await.map_err(ApiError::network)?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{} failed: {status}", resp.url());
        return Err(ApiError::from_response(status, &body));
    }
    resp.json::<T>().await.map_err(ApiError::network)
}

/// Create an account via `POST /api/users/register`.
///
/// # Errors
///
/// Returns the server-provided message on rejection (e.g. duplicate email).
pub async fn register(request: &RegisterRequest) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&config().register_url()).json(request);
        fetch_json::<Session>(req).await.and_then(ensure_complete)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(not_available())
    }
}

/// Sign in via `POST /api/users/login`.
///
/// # Errors
///
/// Returns the server-provided message on rejection (e.g. bad credentials).
pub async fn login(request: &LoginRequest) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&config().login_url()).json(request);
        fetch_json::<Session>(req).await.and_then(ensure_complete)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(not_available())
    }
}

/// Post a donation via `POST /api/donations`. Donor sessions only.
///
/// # Errors
///
/// `Unauthorized` without a token, `Forbidden` for receivers, otherwise the
/// normalized server or network failure.
pub async fn create_donation(session: Option<&Session>, donation: &NewDonation) -> Result<Donation, ApiError> {
    let session = role::require(session, Capability::CreateDonation)?;
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&config().donations_url())
            .header("Authorization", &bearer_header(&session.token))
            .json(donation);
        fetch_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, donation);
        Err(not_available())
    }
}

/// List every available donation via `GET /api/donations`. Unauthenticated.
///
/// # Errors
///
/// Returns the normalized server or network failure.
pub async fn list_available_donations() -> Result<Vec<Donation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(gloo_net::http::Request::get(&config().donations_url()).build()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(not_available())
    }
}

/// Claim a donation via `PUT /api/donations/{id}/claim`. Receiver sessions only.
///
/// # Errors
///
/// `Unauthorized` without a token, `Forbidden` for donors, `Validation` for a
/// blank id, otherwise the normalized server or network failure.
pub async fn claim_donation(session: Option<&Session>, donation_id: &str) -> Result<Donation, ApiError> {
    let session = role::require(session, Capability::ClaimDonation)?;
    let donation_id = require_id(donation_id)?;
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::put(&config().claim_url(donation_id))
            .header("Authorization", &bearer_header(&session.token))
            .json(&serde_json::json!({}));
        fetch_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, donation_id);
        Err(not_available())
    }
}

/// Donations posted by the signed-in donor (`GET /api/donations/mydonations`).
///
/// # Errors
///
/// `Unauthorized` without a token, `Forbidden` for receivers, otherwise the
/// normalized server or network failure.
pub async fn list_my_donations(session: Option<&Session>) -> Result<Vec<Donation>, ApiError> {
    let session = role::require(session, Capability::ViewMyDonations)?;
    fetch_history(session).await
}

/// Donations claimed by the signed-in receiver (`GET /api/donations/myclaims`).
///
/// # Errors
///
/// `Unauthorized` without a token, `Forbidden` for donors, otherwise the
/// normalized server or network failure.
pub async fn list_my_claims(session: Option<&Session>) -> Result<Vec<Donation>, ApiError> {
    let session = role::require(session, Capability::ViewMyClaims)?;
    fetch_history(session).await
}

/// The profile history for whichever role `session` holds.
///
/// # Errors
///
/// Same as [`list_my_donations`] / [`list_my_claims`].
pub async fn list_history(session: &Session) -> Result<Vec<Donation>, ApiError> {
    match session.role {
        Role::Donor => list_my_donations(Some(session)).await,
        Role::Receiver => list_my_claims(Some(session)).await,
    }
}

async fn fetch_history(session: &Session) -> Result<Vec<Donation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&config().history_url(session.role))
            .header("Authorization", &bearer_header(&session.token))
            .build();
        fetch_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(not_available())
    }
}
