//! Networking modules for the remote REST API and the geocoder.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth and donation calls; `geocode` handles forward address
//! lookup. Both return `domain::ApiError` so views never inspect raw
//! responses.

pub mod api;
pub mod geocode;
