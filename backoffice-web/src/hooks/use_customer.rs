use yew::prelude::*;

use crate::collections::selection::SelectionState;
use crate::hooks::use_paginated::{UsePaginatedHandle, use_paginated};
use shared::models::Customer;

pub struct UseCustomerHandle {
    pub list: UsePaginatedHandle<Customer>,
    pub selection: SelectionState,
    pub selected: Option<Customer>,
    pub view_by_id: Callback<Vec<String>>,
    pub close_modal: Callback<()>,
}

#[hook]
pub fn use_customer() -> UseCustomerHandle {
    let list = use_paginated::<Customer>();
    let selection = use_state(SelectionState::default);

    let view_by_id = {
        let selection = selection.clone();
        Callback::from(move |ids: Vec<String>| {
            let mut next = (*selection).clone();
            if next.view_by_id(&ids) {
                selection.set(next);
            }
        })
    };

    let close_modal = {
        let selection = selection.clone();
        Callback::from(move |()| {
            let mut next = (*selection).clone();
            next.close();
            selection.set(next);
        })
    };

    let selected = selection.selected_id.as_deref().and_then(|id| {
        list.state
            .items
            .iter()
            .find(|customer| customer.id.to_string() == id)
            .cloned()
    });

    UseCustomerHandle {
        selection: (*selection).clone(),
        selected,
        list,
        view_by_id,
        close_modal,
    }
}
