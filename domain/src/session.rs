//! Authenticated session and the auth request payloads.
//!
//! The REST API answers both `register` and `login` with the same flat user
//! record plus a bearer token; that record is persisted verbatim as the
//! browser session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The logged-in user's identity and bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Server user identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Bearer token sent as `Authorization: Bearer <token>`.
    pub token: String,
}

impl Session {
    /// A session is usable only when every identity field and the token are
    /// present. Anything less is treated as no session at all.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty()
            && !self.name.trim().is_empty()
            && !self.email.is_empty()
            && !self.token.is_empty()
    }

    /// Parse a stored or server-returned session, rejecting partial records.
    #[must_use]
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw).ok().filter(Self::is_complete)
    }
}

/// Payload for `POST /api/users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Payload for `POST /api/users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
