use crate::error::ApiError;
use crate::hooks::use_auth;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use shared::models::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

fn failure_key(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status { .. } if error.is_unauthorized() => "signin.errors.credentials",
        ApiError::Network(_) => "signin.errors.network",
        ApiError::MissingToken => "signin.errors.token",
        _ => "signin.errors.generic",
    }
}

#[function_component(SignInPage)]
pub fn signin_page() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let login = auth.login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            login.emit(LoginRequest {
                username: (*username).trim().to_string(),
                password: (*password).clone(),
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = auth.pending;
    let disable_submit = username.trim().is_empty() || password.is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{ i18n.t("signin.title") }</h2>
                    if let Some(error) = &auth.error {
                        <div class="alert alert-error">
                            <span>{ i18n.t(failure_key(error)) }</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{ i18n.t("signin.username") }</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            autocomplete="username"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{ i18n.t("signin.password") }</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if is_busy { i18n.t("signin.busy") } else { i18n.t("signin.submit") } }
                        </button>
                    </div>
                    <div class="flex justify-center gap-4 text-sm mt-2">
                        <Link<MainRoute> to={MainRoute::Terms} classes="link">{ i18n.t("routes.terms.title") }</Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Privacy} classes="link">{ i18n.t("routes.privacy.title") }</Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
