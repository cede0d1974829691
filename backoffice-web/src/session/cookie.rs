//! Token persistence in the `token` cookie.

use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Name of the cookie holding the session token.
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Lifetime of the token cookie.
pub const TOKEN_MAX_AGE: Duration = Duration::weeks(1);

/// Storage for the session token.
///
/// Reads are synchronous so the guard and the auth session see the same
/// value within one tick.
pub trait TokenStore {
    /// The stored token, if any. Empty values count as absent.
    fn get(&self) -> Option<String>;
    /// Persist a new token.
    fn set(&self, token: &str);
    /// Forget the token.
    fn clear(&self);
}

/// [`TokenStore`] backed by `document.cookie`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieTokenStore;

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        read_document_cookie().and_then(|header| find_cookie(&header, TOKEN_COOKIE_NAME))
    }

    fn set(&self, token: &str) {
        write_document_cookie(&session_cookie(token).to_string());
    }

    fn clear(&self) {
        write_document_cookie(&expired_cookie().to_string());
    }
}

/// Cookie carrying `token` for one week.
pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE_NAME, token.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(TOKEN_MAX_AGE)
        .build()
}

/// Cookie that makes the browser drop the token immediately.
pub fn expired_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE_NAME, String::new()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}

/// Look up a non-empty cookie value in a `document.cookie` style header.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into().ok()
}

fn read_document_cookie() -> Option<String> {
    html_document()?.cookie().ok()
}

fn write_document_cookie(value: &str) {
    let Some(document) = html_document() else {
        log::warn!("no document available, token cookie not written");
        return;
    };
    if let Err(err) = document.set_cookie(value) {
        log::error!("failed to write token cookie: {err:?}");
    }
}

/// In-memory [`TokenStore`] for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: std::cell::RefCell::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone().filter(|value| !value.is_empty())
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let rendered = session_cookie("a.b.c").to_string();
        assert!(rendered.starts_with("token=a.b.c"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=604800"));
        assert!(rendered.contains("SameSite=Lax"));
    }

    #[test]
    fn test_expired_cookie_drops_value() {
        let rendered = expired_cookie().to_string();
        assert!(rendered.starts_with("token=;"));
        assert!(rendered.contains("Max-Age=0"));
    }

    #[test]
    fn test_find_cookie() {
        let header = "theme=dark; token=x.y.z; lang=en";
        assert_eq!(find_cookie(header, "token"), Some("x.y.z".to_string()));
        assert_eq!(find_cookie(header, "missing"), None);
        assert_eq!(find_cookie("token=", "token"), None);
        assert_eq!(find_cookie("", "token"), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get(), None);
        store.set("abc");
        assert_eq!(store.get(), Some("abc".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
    }
}
