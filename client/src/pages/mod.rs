//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod create_donation;
pub mod donations;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
