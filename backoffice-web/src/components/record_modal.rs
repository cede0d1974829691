use i18nrs::yew::use_translation;
use yew::prelude::*;

/// Read-only detail dialog: a title and labelled values.
#[derive(Properties, PartialEq)]
pub struct RecordModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub fields: Vec<(String, String)>,
    pub on_close: Callback<()>,
}

#[function_component(RecordModal)]
pub fn record_modal(props: &RecordModalProps) -> Html {
    let (i18n, ..) = use_translation();
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes!("modal", props.open.then_some("modal-open"))}>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                <dl class="mt-4 grid grid-cols-3 gap-2">
                    { for props.fields.iter().map(|(label, value)| html! {
                        <>
                            <dt class="font-semibold">{ label }</dt>
                            <dd class="col-span-2">{ value }</dd>
                        </>
                    }) }
                </dl>
                <div class="modal-action">
                    <button class="btn" {onclick}>{ i18n.t("common.close") }</button>
                </div>
            </div>
        </div>
    }
}
