use crate::{hooks::use_auth, routes::MainRoute, session::jwt::decode_claims};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    let Some(token) = auth.token.as_deref() else {
        return html! {};
    };
    let subject = decode_claims(token)
        .ok()
        .and_then(|claims| claims.sub)
        .unwrap_or_else(|| i18n.t("header.account"));

    let settings_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Settings);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("routes.setting.title")}</a></li>
        }
    };

    let logout_button = {
        let logout = auth.logout.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            logout.emit(());
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ subject }</div>
                </li>
                <div class="divider my-0"></div>
                {settings_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
