//! Per-navigation access decision.

use crate::routes::MainRoute;
use crate::session::jwt::{TokenStatus, token_status};

/// Paths reachable without a valid session.
pub const PUBLIC_PATHS: [&str; 3] = ["/signin", "/terms", "/privacy"];

/// Where the navigation should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested route.
    Allow,
    /// Replace the requested route.
    Redirect(MainRoute),
}

/// Decision plus whether the stored token must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOutcome {
    /// The stored token is expired or malformed.
    pub clear_token: bool,
    /// Navigation decision.
    pub decision: GuardDecision,
}

/// Whether `path` is in the public allow-list.
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&normalize(path))
}

/// Decide a navigation to `path` given the stored token.
///
/// Undecodable tokens are handled exactly like expired ones.
pub fn evaluate(token: Option<&str>, path: &str, now_ms: i64) -> GuardOutcome {
    let status = token_status(token, now_ms);
    let clear_token = matches!(status, TokenStatus::Expired | TokenStatus::Malformed(_));
    let authenticated = status.is_valid();
    let path = normalize(path);

    let decision = if !authenticated && !is_public(path) {
        GuardDecision::Redirect(MainRoute::SignIn)
    } else if authenticated && path == "/signin" {
        GuardDecision::Redirect(MainRoute::Home)
    } else {
        GuardDecision::Allow
    };

    GuardOutcome {
        clear_token,
        decision,
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
