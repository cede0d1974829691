use std::rc::Rc;

use shared::models::{LoginRequest, LoginResponse};

use crate::api::ApiTransport;
use crate::error::ApiError;
use crate::routes::MainRoute;
use crate::session::cookie::TokenStore;
use crate::session::jwt::{TokenStatus, token_status};

/// Sign-in endpoint, relative to the API base URL.
pub const SIGNIN_PATH: &str = "/api/v1/auth/signin";

/// Result of [`AuthSession::check_token_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCheck {
    /// Nothing stored; nothing done.
    NoToken,
    /// Token stored and still valid.
    Valid,
    /// Token was expired or malformed and has been cleared. Navigate to the
    /// carried route.
    LoggedOut(MainRoute),
}

/// Owns the session token: sign-in, sign-out and expiry checks.
pub struct AuthSession {
    transport: Rc<dyn ApiTransport>,
    store: Rc<dyn TokenStore>,
}

impl AuthSession {
    pub fn new(transport: Rc<dyn ApiTransport>, store: Rc<dyn TokenStore>) -> Self {
        Self { transport, store }
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Post credentials and persist the returned token.
    ///
    /// Navigation is left to the caller.
    ///
    /// # Errors
    /// Transport errors propagate; a response without a token yields
    /// [`ApiError::MissingToken`].
    pub async fn login(&self, credentials: &LoginRequest) -> Result<String, ApiError> {
        let body = serde_json::to_value(credentials)?;
        let response = self.transport.post_json(SIGNIN_PATH, body).await?;
        let login: LoginResponse = serde_json::from_value(response).unwrap_or_default();
        let token = login.token().ok_or(ApiError::MissingToken)?.to_string();
        self.store.set(&token);
        log::info!("signed in as {}", credentials.username);
        Ok(token)
    }

    /// Forget the token and return the route to land on.
    pub fn logout(&self) -> MainRoute {
        self.store.clear();
        log::info!("signed out");
        MainRoute::SignIn
    }

    /// Drop the token without choosing a destination.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Log out if the stored token is expired or malformed.
    pub fn check_token_status(&self, now_ms: i64) -> TokenCheck {
        match token_status(self.store.get().as_deref(), now_ms) {
            TokenStatus::Missing => TokenCheck::NoToken,
            TokenStatus::Valid { .. } => TokenCheck::Valid,
            TokenStatus::Expired => {
                log::info!("session token expired");
                TokenCheck::LoggedOut(self.logout())
            }
            TokenStatus::Malformed(err) => {
                log::warn!("discarding malformed session token: {err}");
                TokenCheck::LoggedOut(self.logout())
            }
        }
    }

    /// Fail-closed expiry check on the stored token.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        crate::session::jwt::is_expired(self.store.get().as_deref(), now_ms)
    }
}
