//! Shared helpers for tfreg-core integration tests

use async_trait::async_trait;
use std::sync::Once;
use tfreg_core::query::SearchQuery;
use tfreg_core::registry::RegistryClient;
use tfreg_core::{Result, SearchError};

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Client that answers every search with a fixed body
pub struct StaticClient {
    pub body: String,
}

#[async_trait]
impl RegistryClient for StaticClient {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<u8>> {
        Ok(self.body.clone().into_bytes())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Client whose transport always fails
pub struct FailingClient;

#[async_trait]
impl RegistryClient for FailingClient {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<u8>> {
        Err(SearchError::Transport("connection reset by peer".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Registry body holding one module per JSON object in `modules`
pub fn search_body(modules: &[serde_json::Value]) -> String {
    serde_json::json!({
        "meta": {"limit": 15, "current_offset": 0},
        "modules": modules,
    })
    .to_string()
}

pub fn module_json(
    namespace: &str,
    name: &str,
    provider: &str,
    verified: bool,
    description: &str,
    source: &str,
) -> serde_json::Value {
    serde_json::json!({
        "id": format!("{namespace}/{name}/{provider}/1.0.0"),
        "owner": "",
        "namespace": namespace,
        "name": name,
        "version": "1.0.0",
        "provider": provider,
        "description": description,
        "source": source,
        "published_at": "2018-12-17T21:27:51.325136Z",
        "downloads": 100,
        "verified": verified,
    })
}
