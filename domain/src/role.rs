//! Marketplace roles and the capabilities each one grants.
//!
//! DESIGN
//! ======
//! Role rules live in one table (`Role::can`). Header links, the claim
//! button, the create form and the API helpers all ask the same question, so
//! a role change never needs to be chased through view code.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::session::Session;

/// Account role chosen at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Posts surplus food.
    #[default]
    Donor,
    /// Claims posted food.
    Receiver,
}

/// Actions gated by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    CreateDonation,
    ClaimDonation,
    ViewMyDonations,
    ViewMyClaims,
}

impl Role {
    /// Lowercase wire name (`"donor"` / `"receiver"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Receiver => "receiver",
        }
    }

    /// Whether this role may perform `capability`.
    #[must_use]
    pub fn can(self, capability: Capability) -> bool {
        matches!(
            (self, capability),
            (Self::Donor, Capability::CreateDonation | Capability::ViewMyDonations)
                | (Self::Receiver, Capability::ClaimDonation | Capability::ViewMyClaims)
        )
    }
}

impl Capability {
    /// User-facing explanation when a session lacks this capability.
    #[must_use]
    pub fn denied_message(self) -> &'static str {
        match self {
            Self::CreateDonation => "Only donors can post donations.",
            Self::ClaimDonation => "Only receivers can claim donations.",
            Self::ViewMyDonations => "Only donors have a donation history.",
            Self::ViewMyClaims => "Only receivers have a claim history.",
        }
    }
}

/// Check that `session` exists and grants `capability`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when there is no session or its token is
/// empty, and [`ApiError::Forbidden`] when the role lacks the capability.
pub fn require(session: Option<&Session>, capability: Capability) -> Result<&Session, ApiError> {
    let Some(session) = session.filter(|s| !s.token.is_empty()) else {
        return Err(ApiError::Unauthorized("Not authorized, no token".to_owned()));
    };
    if !session.role.can(capability) {
        return Err(ApiError::Forbidden(capability.denied_message().to_owned()));
    }
    Ok(session)
}
