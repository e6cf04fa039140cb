//! Shared marketplace model for the FoodShare client and its tests.
//!
//! This crate owns the REST wire representation (sessions, donations, request
//! payloads), the role/capability rules used by both UI gating and API-call
//! guards, and the typed error every API helper returns. Nothing here touches
//! the browser, so the whole crate is testable natively.

pub mod datetime;
pub mod donation;
pub mod error;
pub mod role;
pub mod session;

pub use donation::{Category, Donation, DonationStatus, Location, LonLat, NewDonation};
pub use error::ApiError;
pub use role::{Capability, Role};
pub use session::{LoginRequest, RegisterRequest, Session};
