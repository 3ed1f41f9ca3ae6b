//! tfreg - Terraform module registry search for launcher script filters
//!
//! Invoked by the launcher with the typed query as positional arguments.
//! Prints the script filter JSON to stdout; logs and errors go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tfreg_core::alfred::Transformer;
use tfreg_core::config::SearchConfig;
use tfreg_core::query::SearchQuery;
use tfreg_core::registry::HttpRegistryClient;
use tfreg_core::search::search_modules;

/// Log filter directive (e.g. "debug", "tfreg_core=trace")
const LOG_ENV: &str = "TFREG_LOG";

/// Set to "json" for structured log output
const LOG_FORMAT_ENV: &str = "TFREG_LOG_FORMAT";

/// Flags are deliberately disabled: every token is part of the query
#[derive(Parser, Debug)]
#[clap(
    name = "tfreg",
    about = "Search the Terraform module registry and print launcher script filter JSON",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Search text; multiple tokens are joined with spaces
    #[clap(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,
}

/// Initialize tracing from the environment
///
/// Output MUST go to stderr; stdout carries the launcher document.
fn initialize_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing();

    let config = SearchConfig::load().context("Failed to load configuration")?;
    debug!(
        "Using registry {} with {} variant",
        config.registry_url, config.variant
    );

    let query = SearchQuery::from_args(&cli.query)?;
    let client = HttpRegistryClient::new(config.registry_url.clone(), config.timeout())?;
    let transformer = Transformer::new(config.transform_options());

    let document = search_modules(&client, &query, &transformer)
        .await
        .with_context(|| format!("Search for '{}' failed", query.phrase()))?;

    // Serialize fully before writing so errors never leave partial JSON
    let output = document.to_json_pretty()?;
    println!("{output}");

    Ok(())
}
