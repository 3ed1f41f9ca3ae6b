//! Terraform module registry access
//!
//! Holds the search response model and the transport used to fetch it.
//!
//! ```text
//! SearchQuery ──► RegistryClient::search ──► bytes
//!                                              │
//!                                              ▼
//!                                  SearchResponse::from_slice
//! ```

mod client;
mod types;

pub use client::{HttpRegistryClient, RegistryClient};
pub use types::{RegistryModule, SearchMeta, SearchResponse};

#[cfg(test)]
pub(crate) use client::MockClient;

/// Default public registry base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.terraform.io";
