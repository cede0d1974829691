use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::collections::selection::SelectionState;
use crate::hooks::use_paginated::{UsePaginatedHandle, use_paginated};
use shared::models::Category;

/// Unpaginated listing of every category.
pub const CATEGORY_ALL_PATH: &str = "/category/all";

pub struct UseCategoryHandle {
    pub list: UsePaginatedHandle<Category>,
    pub selection: SelectionState,
    /// The category the selection points at, if it is currently listed.
    pub selected: Option<Category>,
    pub fetch_all: Callback<()>,
    pub view_by_id: Callback<Vec<String>>,
    pub edit_by_id: Callback<Vec<String>>,
    pub close_modal: Callback<()>,
}

#[hook]
pub fn use_category() -> UseCategoryHandle {
    let list = use_paginated::<Category>();
    let selection = use_state(SelectionState::default);

    let fetch_all = {
        let collection = list.collection.clone();
        Callback::from(move |()| {
            let collection = collection.clone();
            spawn_local(async move { collection.fetch_all(CATEGORY_ALL_PATH).await });
        })
    };

    let view_by_id = {
        let selection = selection.clone();
        Callback::from(move |ids: Vec<String>| {
            let mut next = (*selection).clone();
            if next.view_by_id(&ids) {
                selection.set(next);
            } else {
                log::debug!("view needs exactly one category, got {}", ids.len());
            }
        })
    };

    let edit_by_id = {
        let selection = selection.clone();
        Callback::from(move |ids: Vec<String>| {
            let mut next = (*selection).clone();
            if next.edit_by_id(&ids) {
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
            .visible()
            .iter()
            .find(|category| category.id.to_string() == id)
            .cloned()
    });

    UseCategoryHandle {
        selection: (*selection).clone(),
        selected,
        list,
        fetch_all,
        view_by_id,
        edit_by_id,
        close_modal,
    }
}
