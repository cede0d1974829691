use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use shared::models::ErrorResponse;
use std::fmt;
use std::rc::Rc;

use crate::config::FrontendConfig;
use crate::error::ApiError;
use crate::session::{CookieTokenStore, TokenStore};

thread_local! {
    static SHARED_CLIENT: OnceCell<BackofficeClient> = const { OnceCell::new() };
}

/// JSON-over-HTTP calls against the Backoffice API.
///
/// Paths are relative to the API base URL and may carry a query string.
#[async_trait(?Send)]
pub trait ApiTransport {
    /// `GET` a path and decode the body as JSON.
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// `POST` a JSON body and decode the response as JSON.
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

/// Lightweight API client for the Backoffice web app.
#[derive(Clone)]
pub struct BackofficeClient {
    base_url: String,
    client: Client,
    tokens: Rc<dyn TokenStore>,
}

impl fmt::Debug for BackofficeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackofficeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BackofficeClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            tokens,
        }
    }

    /// The client shared by every hook in this session.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(&config.api_base_url(), Rc::new(CookieTokenStore))
            })
            .clone()
        })
    }

    /// [`Self::shared`] behind the transport trait.
    pub fn shared_transport() -> Rc<dyn ApiTransport> {
        Rc::new(Self::shared())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorResponse>().await.ok();
            return Err(ApiError::from_status(status.as_u16(), body.as_ref()));
        }
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl ApiTransport for BackofficeClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.api_url(path);
        log::debug!("GET {url}");
        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        let url = self.api_url(path);
        log::debug!("POST {url}");
        let response = self
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await?;
        Self::read_json(response).await
    }
}

/// Scripted [`ApiTransport`] for tests.
#[cfg(test)]
pub mod test_transport {
    use super::{ApiError, ApiTransport, Value};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    type Reply = Result<Value, ApiError>;

    enum Queued {
        Ready(Reply),
        Deferred(oneshot::Receiver<Reply>),
    }

    /// Replays queued replies per path and records every call.
    #[derive(Default)]
    pub struct MockTransport {
        replies: RefCell<HashMap<String, VecDeque<Queued>>>,
        calls: RefCell<Vec<(String, Option<Value>)>>,
    }

    impl MockTransport {
        /// Queue an immediate reply for `path`.
        pub fn respond(&self, path: &str, reply: Reply) {
            self.push(path, Queued::Ready(reply));
        }

        /// Queue a reply for `path` that resolves when the sender fires.
        pub fn defer(&self, path: &str) -> oneshot::Sender<Reply> {
            let (sender, receiver) = oneshot::channel();
            self.push(path, Queued::Deferred(receiver));
            sender
        }

        /// Paths requested so far, in order.
        pub fn paths(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(path, _)| path.clone()).collect()
        }

        /// Bodies posted so far, in order.
        pub fn bodies(&self) -> Vec<Value> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|(_, body)| body.clone())
                .collect()
        }

        fn push(&self, path: &str, queued: Queued) {
            self.replies
                .borrow_mut()
                .entry(path.to_string())
                .or_default()
                .push_back(queued);
        }

        async fn reply(&self, path: &str) -> Reply {
            let next = self
                .replies
                .borrow_mut()
                .get_mut(path)
                .and_then(VecDeque::pop_front);
            match next {
                Some(Queued::Ready(reply)) => reply,
                Some(Queued::Deferred(receiver)) => receiver
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Network("reply dropped".to_string()))),
                None => Err(ApiError::Network(format!("no reply queued for {path}"))),
            }
        }
    }

    #[async_trait(?Send)]
    impl ApiTransport for MockTransport {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            self.calls.borrow_mut().push((path.to_string(), None));
            self.reply(path).await
        }

        async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
            self.calls.borrow_mut().push((path.to_string(), Some(body)));
            self.reply(path).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::cookie::MemoryTokenStore;

    #[test]
    fn test_api_url_joins_paths() {
        let client = BackofficeClient::new(
            "http://localhost:8080/",
            Rc::new(MemoryTokenStore::default()),
        );
        assert_eq!(
            client.api_url("/category?pageNumber=2"),
            "http://localhost:8080/category?pageNumber=2"
        );
        assert_eq!(
            client.api_url("api/v1/auth/signin"),
            "http://localhost:8080/api/v1/auth/signin"
        );
    }

    #[test]
    fn test_debug_hides_token_store() {
        let client = BackofficeClient::new(
            "http://localhost:8080",
            Rc::new(MemoryTokenStore::with_token("secret.token.value")),
        );
        let rendered = format!("{client:?}");
        assert!(rendered.contains("localhost:8080"));
        assert!(!rendered.contains("secret"));
    }
}
