//! Browser tests for the pieces that need a real document.

use wasm_bindgen_test::*;

use crate::config::FrontendConfig;
use crate::session::{CookieTokenStore, TokenStore};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn cookie_store_keeps_token_until_cleared() {
    let store = CookieTokenStore;
    store.set("header.payload.signature");
    assert_eq!(store.get().as_deref(), Some("header.payload.signature"));

    store.clear();
    assert_eq!(store.get(), None);
}

#[wasm_bindgen_test]
fn api_base_url_is_absolute() {
    let url = FrontendConfig::new().api_base_url();
    assert!(url.starts_with("http"), "{url}");
}

#[wasm_bindgen_test]
fn ending_session_resets_token_and_dashboard() {
    use crate::hooks::use_auth::end_session;
    use crate::models::app_state::AppState;
    use crate::models::dashboard_state::DashboardState;
    use crate::routes::MainRoute;
    use yewdux::Dispatch;

    let cx = yewdux::Context::new();
    let app = Dispatch::<AppState>::new(&cx);
    let dashboard = Dispatch::<DashboardState>::new(&cx);
    app.reduce_mut(|state| state.token = Some("header.payload.signature".to_string()));
    dashboard.reduce_mut(|state| {
        state.navigated("/category");
        state.notifications_open = true;
    });

    end_session(&app, &dashboard, None, MainRoute::SignIn);

    assert_eq!(app.get().token, None);
    assert_eq!(*dashboard.get(), DashboardState::default());
}
