//! Storage-backed request cache.
//!
//! [`CachedFetcher`] consults the selected storage backend before touching
//! the network and writes successful responses back under the request URL.
//! Entries never expire; a key that is present is authoritative for the
//! lifetime of the backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::{FetchError, ParseError};
use crate::core::storage::{Backend, Storage, StorageProvider};

// =============================================================================
// Request / Response
// =============================================================================

/// Transport-level options forwarded verbatim to the network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method name, `GET` unless set.
    pub method: String,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds `Authorization: token <key>` when a key is given.
    pub fn with_token(self, token: Option<&str>) -> Self {
        match token {
            Some(key) => self.with_header("Authorization", format!("token {key}")),
            None => self,
        }
    }
}

/// Raw HTTP response as seen by the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single network round trip.
///
/// The UI runs on a single-threaded event loop, so futures are not `Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, FetchError>;
}

// =============================================================================
// Cache configuration
// =============================================================================

/// How the response body should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputShape {
    #[default]
    Json,
    Text,
}

/// Per-call cache configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Backend to consult and write, or `None` to bypass caching entirely.
    pub backend: Option<Backend>,
    pub shape: OutputShape,
}

impl FetchConfig {
    pub fn cached(backend: Backend, shape: OutputShape) -> Self {
        Self {
            backend: Some(backend),
            shape,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::cached(Backend::Session, OutputShape::Json)
    }
}

/// A response body, parsed according to its [`OutputShape`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchedValue {
    Json(Value),
    Text(String),
}

impl FetchedValue {
    /// Parses `body` into the requested shape.
    pub fn parse(body: String, shape: OutputShape) -> Result<Self, ParseError> {
        match shape {
            OutputShape::Json => Ok(Self::Json(serde_json::from_str(&body)?)),
            OutputShape::Text => Ok(Self::Text(body)),
        }
    }

    /// String form written to storage.
    fn to_stored(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    pub fn into_json(self) -> Result<Value, ParseError> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

// =============================================================================
// CachedFetcher
// =============================================================================

/// Network fetcher with a storage-backed cache.
///
/// Concurrent misses on the same key are not coalesced: both requests hit
/// the network and the last write wins.
pub struct CachedFetcher<T, S> {
    transport: T,
    storage: S,
}

impl<T: Transport, S: StorageProvider> CachedFetcher<T, S> {
    pub fn new(transport: T, storage: S) -> Self {
        Self { transport, storage }
    }

    /// Fetches `url`, serving from `config.backend` when an entry exists.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Network`] if the transport fails
    /// * [`FetchError::Http`] for non-2xx responses (nothing is cached)
    /// * [`FetchError::Parse`] if a JSON body is malformed (nothing is cached),
    ///   or if the stored entry for `url` is (the network is not consulted)
    pub async fn get(
        &self,
        url: &str,
        options: &RequestOptions,
        config: FetchConfig,
    ) -> Result<FetchedValue, FetchError> {
        let store = config.backend.and_then(|b| self.storage.storage(b));

        if let Some(store) = store
            && let Some(cached) = read_cached(store, url, config.shape)
        {
            tracing::debug!(url, "cache hit");
            return cached.map_err(FetchError::from);
        }

        let response = self.transport.send(url, options).await?;
        if !response.ok() {
            tracing::debug!(url, status = response.status, "request failed");
            return Err(FetchError::Http {
                status: response.status,
                body: response.body,
            });
        }

        let value = FetchedValue::parse(response.body, config.shape)?;

        if let Some(store) = store
            && let Err(e) = store.set_item(url, &value.to_stored())
        {
            // Caching is best-effort; the fetched value is still returned.
            tracing::warn!(url, error = %e, "failed to cache response");
        }

        Ok(value)
    }

    /// Fetches JSON and deserializes it into `D`.
    pub async fn get_json<D: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
        backend: Option<Backend>,
    ) -> Result<D, FetchError> {
        let config = FetchConfig {
            backend,
            shape: OutputShape::Json,
        };
        let value = self.get(url, options, config).await?.into_json()?;
        serde_json::from_value(value).map_err(|e| FetchError::Parse(e.into()))
    }

    /// Fetches the body as plain text.
    pub async fn get_text(
        &self,
        url: &str,
        options: &RequestOptions,
        backend: Option<Backend>,
    ) -> Result<String, FetchError> {
        let config = FetchConfig {
            backend,
            shape: OutputShape::Text,
        };
        Ok(self.get(url, options, config).await?.into_text())
    }
}

/// Reads a cache entry. `None` on a miss; a present entry is authoritative,
/// so one that does not parse is an error rather than a miss.
fn read_cached(
    store: &dyn Storage,
    url: &str,
    shape: OutputShape,
) -> Option<Result<FetchedValue, ParseError>> {
    store
        .get_item(url)
        .map(|stored| FetchedValue::parse(stored, shape))
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, VecDeque};

    use async_trait::async_trait;

    use super::{HttpResponse, RequestOptions, Transport};
    use crate::core::error::FetchError;

    /// Replays canned responses per URL; a URL with nothing queued fails
    /// with [`FetchError::Network`].
    #[derive(Default)]
    pub struct StubTransport {
        responses: RefCell<HashMap<String, VecDeque<HttpResponse>>>,
        pub calls: Cell<usize>,
        pub last_options: RefCell<Option<RequestOptions>>,
    }

    impl StubTransport {
        pub fn respond(self, url: &str, status: u16, body: &str) -> Self {
            self.responses
                .borrow_mut()
                .entry(url.to_string())
                .or_default()
                .push_back(HttpResponse {
                    status,
                    body: body.to_string(),
                });
            self
        }
    }

    #[async_trait(?Send)]
    impl Transport for &StubTransport {
        async fn send(
            &self,
            url: &str,
            options: &RequestOptions,
        ) -> Result<HttpResponse, FetchError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_options.borrow_mut() = Some(options.clone());
            self.responses
                .borrow_mut()
                .get_mut(url)
                .and_then(VecDeque::pop_front)
                .ok_or_else(|| FetchError::Network(format!("no response for {url}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::testing::StubTransport;
    use super::*;
    use crate::core::storage::MemoryStorages;

    const URL: &str = "https://api.github.com/repos/tandyx/site/languages";

    #[tokio::test]
    async fn test_second_call_served_from_cache() {
        let transport = StubTransport::default()
            .respond(URL, 200, r#"{"Python": 80, "JavaScript": 20}"#);
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());
        let config = FetchConfig::cached(Backend::Session, OutputShape::Json);

        let first = fetcher.get(URL, &RequestOptions::default(), config).await.unwrap();
        let second = fetcher.get(URL, &RequestOptions::default(), config).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first, FetchedValue::Json(json!({"Python": 80, "JavaScript": 20})));
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_http_error_is_not_cached() {
        let transport = StubTransport::default()
            .respond(URL, 404, "Not Found");
        let storages = MemoryStorages::default();
        let fetcher = CachedFetcher::new(&transport, storages);

        let err = fetcher
            .get(URL, &RequestOptions::default(), FetchConfig::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err,
            FetchError::Http {
                status: 404,
                body: "Not Found".to_string()
            }
        );
        assert_eq!(fetcher.storage.session.len(), 0);
        assert_eq!(fetcher.storage.local.len(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_fails_without_text_fallback() {
        let transport = StubTransport::default()
            .respond(URL, 200, "<html>rate limited</html>");
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());

        let err = fetcher
            .get(URL, &RequestOptions::default(), FetchConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
        assert_eq!(fetcher.storage.session.len(), 0);
    }

    #[tokio::test]
    async fn test_uncached_always_hits_network() {
        let transport = StubTransport::default()
            .respond(URL, 200, "one")
            .respond(URL, 200, "two");
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());
        let config = FetchConfig {
            backend: None,
            shape: OutputShape::Text,
        };

        let first = fetcher.get(URL, &RequestOptions::default(), config).await.unwrap();
        let second = fetcher.get(URL, &RequestOptions::default(), config).await.unwrap();

        assert_eq!(first, FetchedValue::Text("one".to_string()));
        assert_eq!(second, FetchedValue::Text("two".to_string()));
        assert_eq!(fetcher.storage.session.len(), 0);
    }

    #[tokio::test]
    async fn test_backends_are_cached_separately() {
        let transport = StubTransport::default()
            .respond(URL, 200, "[1]")
            .respond(URL, 200, "[2]");
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());

        let session = fetcher
            .get(URL, &RequestOptions::default(), FetchConfig::cached(Backend::Session, OutputShape::Json))
            .await
            .unwrap();
        let local = fetcher
            .get(URL, &RequestOptions::default(), FetchConfig::cached(Backend::Local, OutputShape::Json))
            .await
            .unwrap();

        assert_eq!(session, FetchedValue::Json(json!([1])));
        assert_eq!(local, FetchedValue::Json(json!([2])));
        assert_eq!(fetcher.storage.local.get_item(URL).as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_is_parse_error() {
        let transport = StubTransport::default()
            .respond(URL, 200, r#"{"Rust": 1}"#);
        let storages = MemoryStorages::default();
        storages.session.set_item(URL, "{not json").unwrap();
        let fetcher = CachedFetcher::new(&transport, storages);

        let err = fetcher
            .get(URL, &RequestOptions::default(), FetchConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(fetcher.storage.session.get_item(URL).as_deref(), Some("{not json"));
    }

    #[tokio::test]
    async fn test_text_cache_hit_returned_as_is() {
        let transport = StubTransport::default()
            .respond(URL, 200, "Write-Host 'hi'\n");
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());

        let first = fetcher
            .get_text(URL, &RequestOptions::default(), Some(Backend::Local))
            .await
            .unwrap();
        let second = fetcher
            .get_text(URL, &RequestOptions::default(), Some(Backend::Local))
            .await
            .unwrap();

        assert_eq!(first, "Write-Host 'hi'\n");
        assert_eq!(second, first);
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(fetcher.storage.session.len(), 0);
    }

    #[tokio::test]
    async fn test_storage_write_failure_still_returns_value() {
        let transport = StubTransport::default()
            .respond(URL, 200, "plain body");
        let storages = MemoryStorages::default();
        storages.session.reject_writes();
        let fetcher = CachedFetcher::new(&transport, storages);

        let text = fetcher
            .get_text(URL, &RequestOptions::default(), Some(Backend::Session))
            .await
            .unwrap();

        assert_eq!(text, "plain body");
    }

    #[tokio::test]
    async fn test_get_json_typed_and_headers_forwarded() {
        let transport = StubTransport::default()
            .respond(URL, 200, r#"[{"name": "site", "fork": false}]"#);
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());
        let options = RequestOptions::default().with_token(Some("abc"));

        let repos: Vec<serde_json::Map<String, Value>> =
            fetcher.get_json(URL, &options, None).await.unwrap();

        assert_eq!(repos.len(), 1);
        let forwarded = transport.last_options.borrow().clone().unwrap();
        assert_eq!(forwarded.method, "GET");
        assert_eq!(
            forwarded.headers,
            vec![("Authorization".to_string(), "token abc".to_string())]
        );
    }

    #[tokio::test]
    async fn test_get_json_type_mismatch_is_parse_error() {
        let transport = StubTransport::default()
            .respond(URL, 200, r#"{"a": 1}"#);
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());

        let err = fetcher
            .get_json::<Vec<u64>>(URL, &RequestOptions::default(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_response_ok_range() {
        let resp = |status| HttpResponse {
            status,
            body: String::new(),
        };
        assert!(resp(200).ok());
        assert!(resp(204).ok());
        assert!(!resp(304).ok());
        assert!(!resp(500).ok());
    }

    #[test]
    fn test_with_token_none_leaves_headers_empty() {
        assert!(RequestOptions::default().with_token(None).headers.is_empty());
    }
}
