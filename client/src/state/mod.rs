//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `donations`, `toast`) so individual
//! components can depend on small focused models. Each is provided once at
//! the app root via Leptos context.

pub mod auth;
pub mod donations;
pub mod session_store;
pub mod toast;
