//! Shared DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the REST API's camelCase JSON so serde needs no
//! per-call mapping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::state::session::Role;

/// One row of a resource table, kept as loose JSON.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// What a successful login hands to the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub role: Role,
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Convert into a grant for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if the server sent an empty token.
    pub fn into_grant(self, user_id: &str) -> Result<LoginGrant, ApiError> {
        if self.token.trim().is_empty() {
            return Err(ApiError::Parse("login response missing token".to_owned()));
        }
        Ok(LoginGrant { token: self.token, role: Role::parse(Some(&self.role)), user_id: user_id.to_owned() })
    }
}

/// Error payload the API attaches to non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Registration form, sent as `POST /users/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// The signed-in user's own account details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub primary_location: String,
    pub secondary_location: String,
    pub role: String,
}
