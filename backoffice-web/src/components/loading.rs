use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Spinner row shown while a list request is in flight.
#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="flex items-center justify-center gap-2 p-6 text-base-content/70">
            <span class="loading loading-spinner loading-md"></span>
            <span>{ i18n.t("common.loading") }</span>
        </div>
    }
}
