use std::rc::Rc;

use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_dispatch, use_selector};

use crate::api::BackofficeClient;
use crate::error::ApiError;
use crate::models::app_state::AppState;
use crate::models::dashboard_state::DashboardState;
use crate::routes::MainRoute;
use crate::session::{AuthSession, CookieTokenStore, TokenCheck, now_millis};

pub struct UseAuthHandle {
    pub token: Option<String>,
    pub pending: bool,
    pub error: Option<ApiError>,
    /// Sign in and go to the dashboard on success.
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
    /// Log out when the stored token is expired or malformed.
    pub check_token_status: Callback<()>,
    pub clear_token: Callback<()>,
}

/// Clear session-scoped stores and land on `route`.
pub(crate) fn end_session(
    app: &Dispatch<AppState>,
    dashboard: &Dispatch<DashboardState>,
    navigator: Option<&Navigator>,
    route: MainRoute,
) {
    app.reduce_mut(|state| state.token = None);
    DashboardState::reset(dashboard);
    if let Some(navigator) = navigator {
        navigator.push(&route);
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let session = use_memo((), |()| {
        AuthSession::new(
            BackofficeClient::shared_transport(),
            Rc::new(CookieTokenStore),
        )
    });
    let token = use_selector(|state: &AppState| state.token.clone());
    let app = use_dispatch::<AppState>();
    let dashboard = use_dispatch::<DashboardState>();
    let navigator = use_navigator();
    let pending = use_state(|| false);
    let error = use_state(|| None::<ApiError>);

    let login = {
        let session = session.clone();
        let app = app.clone();
        let navigator = navigator.clone();
        let pending = pending.clone();
        let error = error.clone();
        Callback::from(move |credentials: LoginRequest| {
            let session = session.clone();
            let app = app.clone();
            let navigator = navigator.clone();
            let pending = pending.clone();
            let error = error.clone();
            pending.set(true);
            error.set(None);
            spawn_local(async move {
                match session.login(&credentials).await {
                    Ok(token) => {
                        AppState::set_token(&app, token);
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        log::warn!("sign-in failed: {err}");
                        error.set(Some(err));
                    }
                }
                pending.set(false);
            });
        })
    };

    let logout = {
        let session = session.clone();
        let app = app.clone();
        let dashboard = dashboard.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            let route = session.logout();
            end_session(&app, &dashboard, navigator.as_ref(), route);
        })
    };

    let check_token_status = {
        let session = session.clone();
        let app = app.clone();
        let dashboard = dashboard.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let TokenCheck::LoggedOut(route) = session.check_token_status(now_millis()) {
                end_session(&app, &dashboard, navigator.as_ref(), route);
            }
        })
    };

    let clear_token = {
        let session = session.clone();
        let app = app.clone();
        Callback::from(move |()| {
            session.clear();
            app.reduce_mut(|state| state.token = None);
        })
    };

    UseAuthHandle {
        token: (*token).clone(),
        pending: *pending,
        error: (*error).clone(),
        login,
        logout,
        check_token_status,
        clear_token,
    }
}
