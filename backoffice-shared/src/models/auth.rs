use serde::{Deserialize, Serialize};

/// Credentials posted to `/api/v1/auth/signin`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Body returned by a successful sign-in.
///
/// The token is optional on the wire; callers reject a response without one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Signed session token (JWT).
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// The token, if present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}
