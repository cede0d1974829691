use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::BackofficeClient;
use crate::collections::{ListState, PagedEntity, PaginatedCollection};
use crate::config::FrontendConfig;

/// One rendered list: the state snapshot plus cursor controls.
pub struct UsePaginatedHandle<E: PagedEntity> {
    pub state: ListState<E>,
    pub set_page_number: Callback<u32>,
    pub set_page_size: Callback<u32>,
    pub refresh: Callback<()>,
    pub collection: Rc<PaginatedCollection<E>>,
}

/// Mount a paginated collection for `E` and re-render on every change.
///
/// The first page is fetched on mount; later fetches follow cursor changes.
#[hook]
pub fn use_paginated<E>() -> UsePaginatedHandle<E>
where
    E: PagedEntity,
{
    let collection = use_memo((), |()| {
        PaginatedCollection::<E>::new(
            BackofficeClient::shared_transport(),
            FrontendConfig::new().default_page_size(),
        )
    });
    let update = use_force_update();

    {
        let collection = collection.clone();
        use_effect_with((), move |()| {
            let observer = collection.subscribe(move || update.force_update());
            let fetcher = collection.clone();
            spawn_local(async move { fetcher.fetch_pagination().await });
            move || collection.unsubscribe(observer)
        });
    }

    let set_page_number = {
        let collection = collection.clone();
        Callback::from(move |page_number: u32| {
            let collection = collection.clone();
            spawn_local(async move { collection.set_page_number(page_number).await });
        })
    };

    let set_page_size = {
        let collection = collection.clone();
        Callback::from(move |page_size: u32| {
            let collection = collection.clone();
            spawn_local(async move { collection.set_page_size(page_size).await });
        })
    };

    let refresh = {
        let collection = collection.clone();
        Callback::from(move |()| {
            let collection = collection.clone();
            spawn_local(async move { collection.fetch_pagination().await });
        })
    };

    UsePaginatedHandle {
        state: collection.snapshot(),
        set_page_number,
        set_page_size,
        refresh,
        collection,
    }
}
