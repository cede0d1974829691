use crate::components::{ErrorAlert, Loading, Pager, RecordModal};
use crate::hooks::use_category;
use i18nrs::yew::use_translation;
use shared::models::Category;
use yew::prelude::*;

fn category_fields(category: &Category, t: impl Fn(&str) -> String) -> Vec<(String, String)> {
    vec![
        (t("category.fields.code"), category.code.clone()),
        (t("category.fields.name"), category.name.clone()),
        (
            t("category.fields.active"),
            t(if category.active { "common.yes" } else { "common.no" }),
        ),
    ]
}

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let (i18n, ..) = use_translation();
    let category = use_category();
    let state = &category.list.state;

    let rows = state.visible().iter().map(|item| {
        let view = category.view_by_id.clone();
        let id = item.id.to_string();
        html! {
            <tr class="hover cursor-pointer" onclick={Callback::from(move |_| view.emit(vec![id.clone()]))}>
                <td>{ &item.code }</td>
                <td>{ &item.name }</td>
                <td>
                    if item.active {
                        <span class="badge badge-success">{ i18n.t("common.yes") }</span>
                    } else {
                        <span class="badge">{ i18n.t("common.no") }</span>
                    }
                </td>
            </tr>
        }
    });

    // "Show all" and "Paginate" swap; the latter reloads the current page.
    let (toggle_label, toggle_all) = if state.showing_all() {
        let refresh = category.list.refresh.clone();
        ("category.paginate", Callback::from(move |_| refresh.emit(())))
    } else {
        let fetch_all = category.fetch_all.clone();
        ("category.show_all", Callback::from(move |_| fetch_all.emit(())))
    };

    let fields = category
        .selected
        .as_ref()
        .map(|selected| category_fields(selected, |key| i18n.t(key)))
        .unwrap_or_default();

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ i18n.t("routes.category.title") }</h1>
                <button class="btn btn-outline btn-sm" onclick={toggle_all}>{ i18n.t(toggle_label) }</button>
            </div>
            <ErrorAlert error={state.error.clone()} on_retry={category.list.refresh.clone()} />
            if state.pending {
                <Loading />
            }
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{ i18n.t("category.fields.code") }</th>
                            <th>{ i18n.t("category.fields.name") }</th>
                            <th>{ i18n.t("category.fields.active") }</th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            </div>
            <Pager
                page_number={state.cursor.page_number}
                page_size={state.cursor.page_size}
                total_pages={state.total_pages}
                total_records={state.total_records}
                on_page={category.list.set_page_number.clone()}
                on_page_size={category.list.set_page_size.clone()}
            />
            <RecordModal
                open={category.selection.show_modal}
                title={i18n.t("category.detail")}
                {fields}
                on_close={category.close_modal.clone()}
            />
        </div>
    }
}
