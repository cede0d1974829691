use crate::session::{CookieTokenStore, TokenStore};
use yewdux::{Context, Dispatch, Store};

/// Observable mirror of the session cookie.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub token: Option<String>,
}

impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        Self {
            token: CookieTokenStore.get(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Publish a freshly stored token.
    pub fn set_token(dispatch: &Dispatch<Self>, token: String) {
        dispatch.reduce_mut(|state| state.token = Some(token));
    }

    /// Drop the cookie and the mirrored token.
    pub fn clear_token(dispatch: &Dispatch<Self>) {
        CookieTokenStore.clear();
        dispatch.reduce_mut(|state| state.token = None);
    }
}
