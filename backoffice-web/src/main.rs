mod api;
mod app;
mod collections;
mod components;
mod config;
mod containers;
mod error;
mod hooks;
mod language;
mod logging;
mod models;
mod pages;
mod routes;
mod session;
mod shortcuts;

#[cfg(all(test, target_arch = "wasm32"))]
mod app_test;
#[cfg(test)]
mod routes_test;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{DEFAULT_LANGUAGE, translations};
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let config = I18nProviderConfig {
        translations: translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    // Panic payloads are truncated by default; print them whole.
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        let location = info
            .location()
            .map(|location| format!(" at {}:{}:{}", location.file(), location.line(), location.column()))
            .unwrap_or_default();
        web_sys::console::error_1(&format!("Panic: {payload}{location}").into());
    }));

    logging::init();
    log::info!("starting Backoffice");

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::error!("no document body to mount into");
        return;
    };
    Renderer::<InternationalApp>::with_root(body.into()).render();
}
