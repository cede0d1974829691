//! Session token handling: cookie persistence, JWT expiry, sign-in/out and
//! the navigation guard.

pub mod auth;
pub mod cookie;
pub mod guard;
pub mod jwt;

pub use auth::{AuthSession, TokenCheck};
pub use cookie::{CookieTokenStore, TokenStore};

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
