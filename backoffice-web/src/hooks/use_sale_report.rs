use yew::prelude::*;

use crate::collections::selection::RowModal;
use crate::hooks::use_paginated::{UsePaginatedHandle, use_paginated};
use shared::models::OrderItemDetails;

pub struct UseSaleReportHandle {
    pub list: UsePaginatedHandle<OrderItemDetails>,
    pub modal: RowModal<OrderItemDetails>,
    pub open_modal: Callback<OrderItemDetails>,
    pub close_modal: Callback<()>,
}

/// Order line items with a detail modal caching the clicked row.
#[hook]
pub fn use_sale_report() -> UseSaleReportHandle {
    let list = use_paginated::<OrderItemDetails>();
    let modal = use_state(RowModal::<OrderItemDetails>::default);

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |row: OrderItemDetails| {
            let mut next = (*modal).clone();
            next.open(row);
            modal.set(next);
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |()| {
            let mut next = (*modal).clone();
            next.close();
            modal.set(next);
        })
    };

    UseSaleReportHandle {
        list,
        modal: (*modal).clone(),
        open_modal,
        close_modal,
    }
}
