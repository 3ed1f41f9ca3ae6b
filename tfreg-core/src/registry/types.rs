//! Registry search response model
//!
//! Mirrors the JSON body of `GET /v1/modules/search`. Only the fields the
//! transformer reads are required; the rest are accepted and kept for
//! debugging output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SearchError};

/// Read an explicit `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decoded body of a module search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Paging metadata (not used by the transformer)
    #[serde(default)]
    pub meta: SearchMeta,

    /// Matching modules in registry relevance order
    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Vec<RegistryModule>,

    /// Error messages the registry returns instead of results
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub errors: Vec<String>,
}

/// Paging block of a search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub current_offset: Option<i64>,

    #[serde(default)]
    pub next_offset: Option<i64>,

    #[serde(default)]
    pub next_url: Option<String>,
}

/// One module hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryModule {
    /// Registry identifier, `namespace/name/provider/version`
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Provider short name (e.g. "aws", "azurerm")
    #[serde(deserialize_with = "null_as_default")]
    pub provider: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Source repository URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    /// Whether the module is verified by the registry operator
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,

    #[serde(default)]
    pub downloads: Option<u64>,

    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl SearchResponse {
    /// Decode a raw response body
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Wrap a list of modules in an otherwise empty response
    pub fn from_modules(modules: Vec<RegistryModule>) -> Self {
        Self {
            modules,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The registry's own error messages, if it sent any
    pub fn registry_error(&self) -> Option<SearchError> {
        if self.errors.is_empty() {
            None
        } else {
            Some(SearchError::Registry(self.errors.join("; ")))
        }
    }
}
