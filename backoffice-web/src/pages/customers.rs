use crate::components::{ErrorAlert, Loading, Pager, RecordModal};
use crate::hooks::use_customer;
use i18nrs::yew::use_translation;
use shared::models::Customer;
use yew::prelude::*;

fn customer_fields(customer: &Customer, t: impl Fn(&str) -> String) -> Vec<(String, String)> {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    vec![
        (t("customer.fields.code"), customer.code.clone()),
        (t("customer.fields.name"), customer.name.clone()),
        (t("customer.fields.phone"), optional(&customer.phone)),
        (t("customer.fields.email"), optional(&customer.email)),
        (t("customer.fields.address"), optional(&customer.address)),
    ]
}

#[function_component(CustomersPage)]
pub fn customers_page() -> Html {
    let (i18n, ..) = use_translation();
    let customer = use_customer();
    let state = &customer.list.state;

    let rows = state.items.iter().map(|item| {
        let view = customer.view_by_id.clone();
        let id = item.id.to_string();
        html! {
            <tr class="hover cursor-pointer" onclick={Callback::from(move |_| view.emit(vec![id.clone()]))}>
                <td>{ &item.code }</td>
                <td>{ &item.name }</td>
                <td>{ item.phone.clone().unwrap_or_default() }</td>
                <td>{ item.email.clone().unwrap_or_default() }</td>
            </tr>
        }
    });

    let fields = customer
        .selected
        .as_ref()
        .map(|selected| customer_fields(selected, |key| i18n.t(key)))
        .unwrap_or_default();

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("routes.customer.title") }</h1>
            <ErrorAlert error={state.error.clone()} on_retry={customer.list.refresh.clone()} />
            if state.pending {
                <Loading />
            }
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{ i18n.t("customer.fields.code") }</th>
                            <th>{ i18n.t("customer.fields.name") }</th>
                            <th>{ i18n.t("customer.fields.phone") }</th>
                            <th>{ i18n.t("customer.fields.email") }</th>
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
                on_page={customer.list.set_page_number.clone()}
                on_page_size={customer.list.set_page_size.clone()}
            />
            <RecordModal
                open={customer.selection.show_modal}
                title={i18n.t("customer.detail")}
                {fields}
                on_close={customer.close_modal.clone()}
            />
        </div>
    }
}
