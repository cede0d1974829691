//! JWT payload decoding and expiry checks.
//!
//! Only the payload segment is read; signatures are the backend's concern.
//! Every expiry decision in the app goes through [`decode_claims`].

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;

use crate::error::TokenError;

// JWTs are unpadded base64url, but accept padded input too.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Claims read from a session token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Subject, usually the username.
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiry in seconds since the epoch.
    #[serde(default)]
    pub exp: Option<f64>,
    /// Issue time in seconds since the epoch.
    #[serde(default)]
    pub iat: Option<f64>,
}

impl TokenClaims {
    /// Expiry in milliseconds since the epoch.
    ///
    /// # Errors
    /// [`TokenError::MissingExpiry`] when `exp` is absent or not finite.
    #[allow(clippy::cast_possible_truncation)]
    pub fn expires_at_ms(&self) -> Result<i64, TokenError> {
        self.exp
            .filter(|exp| exp.is_finite())
            .map(|exp| (exp * 1000.0) as i64)
            .ok_or(TokenError::MissingExpiry)
    }
}

/// Decode the payload segment of a JWT.
///
/// # Errors
/// Returns a [`TokenError`] when the token has no payload segment or the
/// payload is not base64-encoded JSON.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;

    let normalized = payload.replace('+', "-").replace('/', "_");
    let bytes = PAYLOAD_ENGINE
        .decode(normalized)
        .map_err(|err| TokenError::Encoding(err.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|err| TokenError::Payload(err.to_string()))
}

/// Validity of a stored token at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// No token, or an empty one.
    Missing,
    /// Decodes and expires after `now`.
    Valid { expires_at_ms: i64 },
    /// Decodes but `now` is at or past the expiry.
    Expired,
    /// Cannot be decoded or has no expiry.
    Malformed(TokenError),
}

impl TokenStatus {
    /// Whether the token may be used.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Classify `token` at `now_ms`.
pub fn token_status(token: Option<&str>, now_ms: i64) -> TokenStatus {
    let Some(token) = token.filter(|token| !token.is_empty()) else {
        return TokenStatus::Missing;
    };
    match decode_claims(token).and_then(|claims| claims.expires_at_ms()) {
        Ok(expires_at_ms) if now_ms >= expires_at_ms => TokenStatus::Expired,
        Ok(expires_at_ms) => TokenStatus::Valid { expires_at_ms },
        Err(err) => TokenStatus::Malformed(err),
    }
}

/// Fail-closed expiry check: anything but a decodable, unexpired token
/// counts as expired.
pub fn is_expired(token: Option<&str>, now_ms: i64) -> bool {
    !token_status(token, now_ms).is_valid()
}
