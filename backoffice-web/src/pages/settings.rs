use crate::config::FrontendConfig;
use crate::hooks::use_auth;
use crate::session::jwt::{TokenStatus, token_status};
use crate::session::now_millis;
use i18nrs::yew::use_translation;
use yew::{Callback, Html, function_component, html};

fn expiry_label(status: &TokenStatus) -> String {
    match status {
        TokenStatus::Valid { expires_at_ms } => chrono::DateTime::from_timestamp_millis(*expires_at_ms)
            .map_or_else(|| expires_at_ms.to_string(), |at| at.format("%Y-%m-%d %H:%M UTC").to_string()),
        _ => "-".to_string(),
    }
}

/// `SettingsPage` page component
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let (i18n, _) = use_translation();
    let auth = use_auth();
    let config = FrontendConfig::new();
    let status = token_status(auth.token.as_deref(), now_millis());

    let sign_out = {
        let logout = auth.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("routes.setting.title") }</h1>
            <div class="card bg-base-200">
                <div class="card-body">
                    <dl class="grid grid-cols-3 gap-2">
                        <dt class="font-semibold">{ i18n.t("settings.api_base_url") }</dt>
                        <dd class="col-span-2 font-mono">{ config.api_base_url() }</dd>
                        <dt class="font-semibold">{ i18n.t("settings.page_size") }</dt>
                        <dd class="col-span-2">{ config.default_page_size().to_string() }</dd>
                        <dt class="font-semibold">{ i18n.t("settings.session_expires") }</dt>
                        <dd class="col-span-2">{ expiry_label(&status) }</dd>
                    </dl>
                    <div class="card-actions justify-end">
                        <button class="btn btn-error btn-outline" onclick={sign_out}>{ i18n.t("header.logout") }</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
