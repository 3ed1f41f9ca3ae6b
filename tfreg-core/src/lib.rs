//! tfreg library exports
//!
//! Searches the Terraform module registry and turns the hits into the
//! script-filter JSON document a launcher renders as a result list.

pub mod alfred;
pub mod config;
pub mod error;
pub mod query;
pub mod registry;
pub mod search;

pub use error::{Result, SearchError};
