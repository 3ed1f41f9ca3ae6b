//! Registry client trait - Abstraction over the search transport
//!
//! The pipeline only needs raw response bytes for a query. Keeping that
//! behind a trait lets tests substitute canned bodies for the HTTP call.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Result, SearchError};
use crate::query::SearchQuery;
use crate::registry::SearchResponse;

/// Trait for registry search transports
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Run a search and return the raw response body
    ///
    /// Implementations make a single attempt; there is no retry.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<u8>>;

    /// Client identifier for logging
    fn name(&self) -> &'static str;
}

/// HTTP client for the public registry API
pub struct HttpRegistryClient {
    client: reqwest::Client,
    registry_url: String,
}

impl HttpRegistryClient {
    /// Create a client against `registry_url`
    ///
    /// A zero `timeout` leaves the request unbounded.
    pub fn new(registry_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("tfreg/", env!("CARGO_PKG_VERSION")));

        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            registry_url: registry_url.into(),
        })
    }
}

/// Error for a non-2xx response, preferring the registry's own messages
fn status_error(status: u16, url: String, body: &[u8]) -> SearchError {
    SearchResponse::from_slice(body)
        .ok()
        .and_then(|response| response.registry_error())
        .unwrap_or(SearchError::Status { status, url })
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<u8>> {
        let url = query.search_url(&self.registry_url);
        debug!("Searching registry: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Registry search failed: HTTP {} from {}", status, url);
            let body = response.bytes().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), url, &body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Transport(format!("Failed to read response body: {e}")))?;

        debug!("Received {} bytes from registry", body.len());
        Ok(body.to_vec())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Canned-response client for testing
#[cfg(test)]
pub struct MockClient {
    pub body: Vec<u8>,
}

#[cfg(test)]
#[async_trait]
impl RegistryClient for MockClient {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<u8>> {
        Ok(self.body.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
