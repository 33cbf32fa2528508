//! Browser network transport.
//!
//! Implements [`Transport`] over the Fetch API via `gloo-net`. Status
//! handling and caching live in [`CachedFetcher`](crate::core::CachedFetcher);
//! this layer only performs the round trip.

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use web_sys::RequestMode;

use crate::core::error::FetchError;
use crate::core::fetch::{HttpResponse, RequestOptions, Transport};

/// Fetch API transport (CORS mode).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, FetchError> {
        let method = Method::from_bytes(options.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| FetchError::RequestCreationFailed)?;

        let builder = options.headers.iter().fold(
            RequestBuilder::new(url).method(method).mode(RequestMode::Cors),
            |builder, (name, value)| builder.header(name, value),
        );

        let request = builder
            .build()
            .map_err(|_| FetchError::RequestCreationFailed)?;

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
