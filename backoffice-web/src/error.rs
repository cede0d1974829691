//! Error types surfaced by the API client and the session layer.

use shared::models::ErrorResponse;
use thiserror::Error;

/// Failures from a call against the Backoffice API.
///
/// Kept `Clone + PartialEq` so the last error can sit in observable list
/// state next to the records it failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The body did not decode into the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Sign-in succeeded at the HTTP level but carried no token.
    #[error("Token not found")]
    MissingToken,
}

impl ApiError {
    /// Build a status error, preferring the backend's own error text.
    pub fn from_status(status: u16, body: Option<&ErrorResponse>) -> Self {
        let message = body
            .and_then(ErrorResponse::summary)
            .map_or_else(|| default_reason(status).to_string(), str::to_string);
        Self::Status { status, message }
    }

    /// HTTP status, when the backend answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the credentials or session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status.as_u16(), None)
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

fn default_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not found",
        500..=599 => "Server error",
        _ => "Request failed",
    }
}

/// Reasons a session token cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not valid base64: {0}")]
    Encoding(String),
    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
    #[error("token carries no usable exp claim")]
    MissingExpiry,
}
