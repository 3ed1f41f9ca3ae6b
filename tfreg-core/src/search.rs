//! Search pipeline: query -> registry -> script filter

use tracing::{debug, info};

use crate::alfred::{ScriptFilter, Transformer};
use crate::error::Result;
use crate::query::SearchQuery;
use crate::registry::{RegistryClient, SearchResponse};

/// Run one search and build the launcher document
///
/// Transport, decode and registry-reported errors end the search. An empty
/// module list is not an error.
pub async fn search_modules(
    client: &dyn RegistryClient,
    query: &SearchQuery,
    transformer: &Transformer,
) -> Result<ScriptFilter> {
    debug!(
        "Searching for {:?} via {} client",
        query.phrase(),
        client.name()
    );

    let body = client.search(query).await?;
    let response = SearchResponse::from_slice(&body)?;

    if let Some(err) = response.registry_error() {
        return Err(err);
    }

    info!(
        query = query.phrase(),
        modules = response.modules.len(),
        "Registry search complete"
    );

    Ok(transformer.transform(&response))
}
