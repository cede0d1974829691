use i18nrs::yew::use_translation;
use yew::prelude::*;

use crate::error::ApiError;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub error: Option<ApiError>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let (i18n, ..) = use_translation();
    let Some(error) = &props.error else {
        return html! {};
    };

    let retry = props.on_retry.clone().map(|on_retry| {
        html! {
            <button class="btn btn-sm" onclick={Callback::from(move |_| on_retry.emit(()))}>
                { i18n.t("common.retry") }
            </button>
        }
    });

    html! {
        <div role="alert" class="alert alert-error my-4">
            <i class="fa-solid fa-circle-exclamation"></i>
            <span>{ error.to_string() }</span>
            { for retry }
        </div>
    }
}
