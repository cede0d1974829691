use crate::components::{ErrorAlert, Loading, Pager, RecordModal};
use crate::hooks::use_sale_report;
use i18nrs::yew::use_translation;
use shared::models::OrderItemDetails;
use yew::prelude::*;

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn line_fields(line: &OrderItemDetails, t: impl Fn(&str) -> String) -> Vec<(String, String)> {
    vec![
        (t("sale_report.fields.order_no"), text(line.order_no.as_deref())),
        (t("sale_report.fields.order_date"), text(line.order_date.as_deref())),
        (t("sale_report.fields.customer"), text(line.customer_name.as_deref())),
        (t("sale_report.fields.product"), text(line.product_name.as_deref())),
        (t("sale_report.fields.quantity"), line.quantity.to_string()),
        (t("sale_report.fields.price"), money(line.price)),
        (t("sale_report.fields.amount"), money(line.line_total())),
    ]
}

#[function_component(SaleReportPage)]
pub fn sale_report_page() -> Html {
    let (i18n, ..) = use_translation();
    let report = use_sale_report();
    let state = &report.list.state;
    let page_total: f64 = state.items.iter().map(OrderItemDetails::line_total).sum();

    let rows = state.items.iter().map(|line| {
        let open = report.open_modal.clone();
        let row = line.clone();
        html! {
            <tr class="hover cursor-pointer" onclick={Callback::from(move |_| open.emit(row.clone()))}>
                <td>{ text(line.order_no.as_deref()) }</td>
                <td>{ text(line.order_date.as_deref()) }</td>
                <td>{ text(line.customer_name.as_deref()) }</td>
                <td>{ text(line.product_name.as_deref()) }</td>
                <td class="text-right">{ line.quantity.to_string() }</td>
                <td class="text-right">{ money(line.price) }</td>
                <td class="text-right">{ money(line.line_total()) }</td>
            </tr>
        }
    });

    let fields = report
        .modal
        .selected
        .as_ref()
        .map(|line| line_fields(line, |key| i18n.t(key)))
        .unwrap_or_default();

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("routes.sale_report.title") }</h1>
            <ErrorAlert error={state.error.clone()} on_retry={report.list.refresh.clone()} />
            if state.pending {
                <Loading />
            }
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{ i18n.t("sale_report.fields.order_no") }</th>
                            <th>{ i18n.t("sale_report.fields.order_date") }</th>
                            <th>{ i18n.t("sale_report.fields.customer") }</th>
                            <th>{ i18n.t("sale_report.fields.product") }</th>
                            <th class="text-right">{ i18n.t("sale_report.fields.quantity") }</th>
                            <th class="text-right">{ i18n.t("sale_report.fields.price") }</th>
                            <th class="text-right">{ i18n.t("sale_report.fields.amount") }</th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                    <tfoot>
                        <tr>
                            <th colspan="6">{ i18n.t("sale_report.page_total") }</th>
                            <th class="text-right">{ money(page_total) }</th>
                        </tr>
                    </tfoot>
                </table>
            </div>
            <Pager
                page_number={state.cursor.page_number}
                page_size={state.cursor.page_size}
                total_pages={state.total_pages}
                total_records={state.total_records}
                on_page={report.list.set_page_number.clone()}
                on_page_size={report.list.set_page_size.clone()}
            />
            <RecordModal
                open={report.modal.open}
                title={i18n.t("sale_report.detail")}
                {fields}
                on_close={report.close_modal.clone()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_fields_compute_missing_amount() {
        let line = OrderItemDetails {
            id: 1,
            order_no: Some("SO-7".to_string()),
            quantity: 3.0,
            price: 2.5,
            ..Default::default()
        };
        let fields = line_fields(&line, str::to_string);
        assert_eq!(fields[0].1, "SO-7");
        assert_eq!(fields[2].1, "-");
        assert_eq!(fields[6].1, "7.50");
    }
}
