//! Paginated entity lists backed by the REST API.
//!
//! A [`PaginatedCollection`] owns one list's state and notifies registered
//! observers after every change. Moving the cursor to a new value issues one
//! fetch; each fetch carries a generation ticket and only the latest ticket
//! may write its result.

pub mod selection;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use shared::helpers::to_typed_array;
use shared::models::{Category, Customer, OrderItemDetails, PageResponse};

use crate::api::ApiTransport;
use crate::error::ApiError;

/// An entity served by a paginated endpoint.
pub trait PagedEntity: DeserializeOwned + Clone + PartialEq + 'static {
    /// Endpoint path, without query string.
    const ENDPOINT: &'static str;
    /// Name used in log lines.
    const LABEL: &'static str;
}

impl PagedEntity for Category {
    const ENDPOINT: &'static str = "/category";
    const LABEL: &'static str = "categories";
}

impl PagedEntity for Customer {
    const ENDPOINT: &'static str = "/customer";
    const LABEL: &'static str = "customers";
}

impl PagedEntity for OrderItemDetails {
    const ENDPOINT: &'static str = "/order";
    const LABEL: &'static str = "order items";
}

/// Which slice of a collection to fetch. Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page_number: u32,
    pub page_size: u32,
}

impl PageCursor {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// `endpoint` with this cursor as query parameters.
    pub fn query_path(&self, endpoint: &str) -> String {
        format!(
            "{endpoint}?pageNumber={}&pageSize={}",
            self.page_number, self.page_size
        )
    }
}

/// Observable state of one list.
///
/// `items` always holds one page. A `fetch_all` result lives in `all` and
/// stays there until the next page is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E> {
    pub items: Vec<E>,
    pub all: Option<Vec<E>>,
    pub cursor: PageCursor,
    pub total_records: u64,
    pub total_pages: u32,
    pub pending: bool,
    pub error: Option<ApiError>,
}

impl<E> ListState<E> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            all: None,
            cursor: PageCursor::new(1, page_size),
            total_records: 0,
            total_pages: 0,
            pending: false,
            error: None,
        }
    }

    fn begin(&mut self) {
        self.pending = true;
        self.error = None;
    }

    // Counters the backend omits keep their previous value.
    fn apply_page(&mut self, page: PageResponse<E>) {
        self.all = None;
        self.items = page.content.unwrap_or_default();
        self.total_records = page.total_records.unwrap_or(self.total_records);
        self.total_pages = page.total_pages.unwrap_or(self.total_pages);
        self.cursor = PageCursor::new(
            page.page_number.unwrap_or(self.cursor.page_number),
            page.page_size.unwrap_or(self.cursor.page_size),
        );
        self.pending = false;
    }

    fn apply_all(&mut self, items: Vec<E>) {
        self.all = Some(items);
        self.pending = false;
    }

    // The current page is left as it was.
    fn apply_all_error(&mut self, error: ApiError) {
        self.all = None;
        self.error = Some(error);
        self.pending = false;
    }

    fn apply_error(&mut self, error: ApiError) {
        self.all = None;
        self.items.clear();
        self.total_records = 0;
        self.total_pages = 0;
        self.error = Some(error);
        self.pending = false;
    }

    /// Records to render: every record after `fetch_all`, else the page.
    pub fn visible(&self) -> &[E] {
        self.all.as_deref().unwrap_or(&self.items)
    }

    pub fn showing_all(&self) -> bool {
        self.all.is_some()
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.cursor.page_number > 1
    }

    /// Whether a following page exists.
    pub fn has_next(&self) -> bool {
        self.cursor.page_number < self.total_pages
    }
}

/// Handle returned by [`PaginatedCollection::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(usize);

type Observer = Rc<dyn Fn()>;

/// One paginated list and the observers rendering it.
pub struct PaginatedCollection<E: PagedEntity> {
    transport: Rc<dyn ApiTransport>,
    state: RefCell<ListState<E>>,
    generation: Cell<u64>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    next_observer: Cell<usize>,
}

impl<E: PagedEntity> PaginatedCollection<E> {
    pub fn new(transport: Rc<dyn ApiTransport>, page_size: u32) -> Self {
        Self {
            transport,
            state: RefCell::new(ListState::new(page_size)),
            generation: Cell::new(0),
            observers: RefCell::new(Vec::new()),
            next_observer: Cell::new(0),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ListState<E> {
        self.state.borrow().clone()
    }

    /// Register `observer` to run after every state change.
    pub fn subscribe(&self, observer: impl Fn() + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(observer, _)| *observer != id);
    }

    fn notify(&self) {
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer();
        }
    }

    fn next_ticket(&self) -> u64 {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }

    /// Fetch the page under the current cursor.
    ///
    /// Failures land in [`ListState::error`] with the list emptied.
    pub async fn fetch_pagination(&self) {
        let ticket = self.next_ticket();
        let path = {
            let mut state = self.state.borrow_mut();
            state.begin();
            state.cursor.query_path(E::ENDPOINT)
        };
        self.notify();

        let result = self.load_page(&path).await;
        if !self.is_current(ticket) {
            log::debug!("discarding stale {} response for {path}", E::LABEL);
            return;
        }
        match result {
            Ok(page) => self.state.borrow_mut().apply_page(page),
            Err(err) => {
                log::warn!("failed to load {}: {err}", E::LABEL);
                self.state.borrow_mut().apply_error(err);
            }
        }
        self.notify();
    }

    /// Load every record from an unpaginated endpoint into
    /// [`ListState::all`]. The paged state is kept; the next cursor change
    /// or page fetch returns to it.
    ///
    /// The response may be a bare array or a `{data: [...]}` envelope.
    pub async fn fetch_all(&self, path: &str) {
        let ticket = self.next_ticket();
        self.state.borrow_mut().begin();
        self.notify();

        let result = self.transport.get_json(path).await;
        if !self.is_current(ticket) {
            log::debug!("discarding stale {} response for {path}", E::LABEL);
            return;
        }
        match result {
            Ok(body) => self.state.borrow_mut().apply_all(to_typed_array(body)),
            Err(err) => {
                log::warn!("failed to load all {}: {err}", E::LABEL);
                self.state.borrow_mut().apply_all_error(err);
            }
        }
        self.notify();
    }

    async fn load_page(&self, path: &str) -> Result<PageResponse<E>, ApiError> {
        let body = self.transport.get_json(path).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Move to `page_number` (clamped to 1) and fetch if it changed or the
    /// list is showing every record.
    pub async fn set_page_number(&self, page_number: u32) {
        let changed = self.update_cursor(|cursor| PageCursor::new(page_number, cursor.page_size));
        if changed {
            self.fetch_pagination().await;
        }
    }

    /// Change the page size (clamped to 1) and fetch if it changed or the
    /// list is showing every record.
    pub async fn set_page_size(&self, page_size: u32) {
        let changed = self.update_cursor(|cursor| PageCursor::new(cursor.page_number, page_size));
        if changed {
            self.fetch_pagination().await;
        }
    }

    fn update_cursor(&self, next: impl FnOnce(PageCursor) -> PageCursor) -> bool {
        let mut state = self.state.borrow_mut();
        let updated = next(state.cursor);
        if updated == state.cursor {
            return state.showing_all();
        }
        state.cursor = updated;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_transport::MockTransport;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;
    use serde_json::json;

    fn categories(count: i64) -> serde_json::Value {
        let items: Vec<_> = (1..=count)
            .map(|id| json!({"id": id, "name": format!("Category {id}"), "code": format!("C{id}"), "active": true}))
            .collect();
        json!(items)
    }

    fn collection(transport: &Rc<MockTransport>) -> Rc<PaginatedCollection<Category>> {
        Rc::new(PaginatedCollection::new(transport.clone(), 10))
    }

    #[test]
    fn test_query_path_carries_cursor() {
        assert_eq!(
            PageCursor::new(3, 25).query_path("/order"),
            "/order?pageNumber=3&pageSize=25"
        );
        assert_eq!(PageCursor::new(0, 0), PageCursor::new(1, 1));
    }

    #[test]
    fn test_fetch_pagination_success() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": categories(3), "totalRecords": 25, "totalPages": 3})),
        );
        let list = collection(&transport);

        block_on(list.fetch_pagination());

        let state = list.snapshot();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.total_records, 25);
        assert_eq!(state.total_pages, 3);
        assert!(!state.pending);
        assert_eq!(state.error, None);
        assert!(state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn test_fetch_pagination_failure_resets_list() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": categories(3), "totalRecords": 25, "totalPages": 3})),
        );
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Err(ApiError::from_status(500, None)),
        );
        let list = collection(&transport);

        block_on(list.fetch_pagination());
        block_on(list.fetch_pagination());

        let state = list.snapshot();
        assert!(state.items.is_empty());
        assert_eq!(state.total_records, 0);
        assert_eq!(state.total_pages, 0);
        assert!(!state.pending);
        assert_eq!(state.error.and_then(|err| err.status()), Some(500));
    }

    #[test]
    fn test_undecodable_page_is_an_error() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": "not a list"})),
        );
        let list = collection(&transport);

        block_on(list.fetch_pagination());

        let state = list.snapshot();
        assert!(matches!(state.error, Some(ApiError::Decode(_))));
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_omitted_counters_keep_previous_values() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": categories(2), "totalRecords": 12, "totalPages": 2})),
        );
        transport.respond(
            "/category?pageNumber=2&pageSize=10",
            Ok(json!({"content": categories(1)})),
        );
        let list = collection(&transport);

        block_on(list.fetch_pagination());
        block_on(list.set_page_number(2));

        let state = list.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total_records, 12);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.cursor.page_number, 2);
    }

    #[test]
    fn test_backend_cursor_echo_is_synced() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=9&pageSize=10",
            Ok(json!({"content": [], "pageNumber": 3, "pageSize": 20, "totalRecords": 50, "totalPages": 3})),
        );
        let list = collection(&transport);

        block_on(list.set_page_number(9));

        let state = list.snapshot();
        assert_eq!(state.cursor, PageCursor::new(3, 20));
        assert_eq!(transport.paths().len(), 1);
    }

    #[test]
    fn test_page_change_triggers_exactly_one_fetch() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": categories(3), "totalRecords": 25, "totalPages": 3})),
        );
        transport.respond(
            "/category?pageNumber=2&pageSize=10",
            Ok(json!({"content": categories(3), "totalRecords": 25, "totalPages": 3})),
        );
        let list = collection(&transport);

        block_on(list.fetch_pagination());
        block_on(list.set_page_number(2));
        block_on(list.set_page_number(2));

        assert_eq!(
            transport.paths(),
            vec![
                "/category?pageNumber=1&pageSize=10".to_string(),
                "/category?pageNumber=2&pageSize=10".to_string(),
            ]
        );
    }

    #[test]
    fn test_page_size_change_triggers_fetch() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=50",
            Ok(json!({"content": categories(5), "totalRecords": 5, "totalPages": 1})),
        );
        let list = collection(&transport);

        block_on(list.set_page_size(50));
        block_on(list.set_page_size(50));

        assert_eq!(transport.paths(), vec!["/category?pageNumber=1&pageSize=50".to_string()]);
        assert_eq!(list.snapshot().items.len(), 5);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let transport = Rc::new(MockTransport::default());
        let slow = transport.defer("/category?pageNumber=2&pageSize=10");
        let fast = transport.defer("/category?pageNumber=3&pageSize=10");
        let list = collection(&transport);
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let first = Rc::clone(&list);
        spawner
            .spawn_local(async move { first.set_page_number(2).await })
            .unwrap();
        pool.run_until_stalled();
        let second = Rc::clone(&list);
        spawner
            .spawn_local(async move { second.set_page_number(3).await })
            .unwrap();
        pool.run_until_stalled();

        fast.send(Ok(json!({"content": categories(1), "totalRecords": 21, "totalPages": 3})))
            .unwrap();
        pool.run_until_stalled();
        assert!(!list.snapshot().pending);

        slow.send(Ok(json!({"content": categories(10), "totalRecords": 21, "totalPages": 3})))
            .unwrap();
        pool.run_until_stalled();

        let state = list.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.cursor.page_number, 3);
        assert!(!state.pending);
    }

    #[test]
    fn test_pending_while_in_flight() {
        let transport = Rc::new(MockTransport::default());
        let reply = transport.defer("/category?pageNumber=1&pageSize=10");
        let list = collection(&transport);
        let mut pool = LocalPool::new();

        let fetcher = Rc::clone(&list);
        pool.spawner()
            .spawn_local(async move { fetcher.fetch_pagination().await })
            .unwrap();
        pool.run_until_stalled();
        assert!(list.snapshot().pending);

        reply.send(Err(ApiError::Network("offline".to_string()))).unwrap();
        pool.run_until_stalled();
        let state = list.snapshot();
        assert!(!state.pending);
        assert_eq!(state.error, Some(ApiError::Network("offline".to_string())));
    }

    #[test]
    fn test_observers_are_notified_until_unsubscribed() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": [], "totalRecords": 0, "totalPages": 0})),
        );
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": [], "totalRecords": 0, "totalPages": 0})),
        );
        let list = collection(&transport);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = list.subscribe(move || counter.set(counter.get() + 1));

        block_on(list.fetch_pagination());
        assert_eq!(calls.get(), 2);

        list.unsubscribe(id);
        block_on(list.fetch_pagination());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_fetch_all_accepts_envelope() {
        let transport = Rc::new(MockTransport::default());
        transport.respond("/category/all", Ok(json!({"data": categories(4)})));
        let list = collection(&transport);

        block_on(list.fetch_all("/category/all"));

        let state = list.snapshot();
        assert!(state.showing_all());
        assert_eq!(state.visible().len(), 4);
        assert!(state.items.is_empty());
        assert_eq!(state.total_pages, 0);
    }

    #[test]
    fn test_fetch_all_degrades_to_empty() {
        let transport = Rc::new(MockTransport::default());
        transport.respond("/category/all", Ok(json!({"unexpected": true})));
        let list = collection(&transport);

        block_on(list.fetch_all("/category/all"));

        let state = list.snapshot();
        assert!(state.visible().is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_fetch_all_keeps_page_state() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": categories(10), "totalRecords": 25, "totalPages": 3})),
        );
        transport.respond("/category/all", Ok(json!(categories(25))));
        let list = collection(&transport);

        block_on(list.fetch_pagination());
        block_on(list.fetch_all("/category/all"));

        let state = list.snapshot();
        assert_eq!(state.visible().len(), 25);
        assert_eq!(state.items.len(), 10);
        assert!(state.items.len() <= state.cursor.page_size as usize);
        assert_eq!(state.total_records, 25);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn test_same_page_after_fetch_all_returns_to_paging() {
        let transport = Rc::new(MockTransport::default());
        for _ in 0..2 {
            transport.respond(
                "/category?pageNumber=1&pageSize=10",
                Ok(json!({"content": categories(10), "totalRecords": 25, "totalPages": 3})),
            );
        }
        transport.respond("/category/all", Ok(json!(categories(25))));
        let list = collection(&transport);

        block_on(list.fetch_pagination());
        block_on(list.fetch_all("/category/all"));
        block_on(list.set_page_number(1));

        assert_eq!(
            transport.paths(),
            vec![
                "/category?pageNumber=1&pageSize=10".to_string(),
                "/category/all".to_string(),
                "/category?pageNumber=1&pageSize=10".to_string(),
            ]
        );
        let state = list.snapshot();
        assert!(!state.showing_all());
        assert_eq!(state.visible().len(), 10);

        block_on(list.set_page_number(1));
        assert_eq!(transport.paths().len(), 3);
    }

    #[test]
    fn test_fetch_all_failure_keeps_current_page() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({"content": categories(3), "totalRecords": 3, "totalPages": 1})),
        );
        transport.respond("/category/all", Err(ApiError::from_status(503, None)));
        let list = collection(&transport);

        block_on(list.fetch_pagination());
        block_on(list.fetch_all("/category/all"));

        let state = list.snapshot();
        assert!(!state.showing_all());
        assert_eq!(state.visible().len(), 3);
        assert_eq!(state.error.and_then(|err| err.status()), Some(503));
    }

    #[test]
    fn test_null_field_does_not_drop_the_page() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(
            "/category?pageNumber=1&pageSize=10",
            Ok(json!({
                "content": [
                    {"id": 1, "name": "Drinks", "code": "DRK", "active": true},
                    {"id": 2, "name": "Snacks", "code": null, "active": true}
                ],
                "totalRecords": 2,
                "totalPages": 1
            })),
        );
        let list = collection(&transport);

        block_on(list.fetch_pagination());

        let state = list.snapshot();
        assert_eq!(state.error, None);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].code, "");
    }
}
