//! Search query construction
//!
//! Launchers hand the typed query over as one or more shell tokens. They are
//! joined back into a single phrase and percent-encoded into the registry's
//! search URL.

use std::borrow::Cow;

use crate::error::{Result, SearchError};

/// Results requested per search (first page only)
pub const SEARCH_LIMIT: u32 = 15;

/// Offset of the requested page
pub const SEARCH_OFFSET: u32 = 0;

/// Path of the module search endpoint, relative to the registry base URL
pub const SEARCH_PATH: &str = "/v1/modules/search";

/// A free-text registry search phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    phrase: String,
}

impl SearchQuery {
    /// Build a query from command-line arguments (program name excluded)
    ///
    /// Arguments are joined with a single space so that `tfreg aws vpc`
    /// searches for `"aws vpc"`.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let first = args.next().ok_or(SearchError::MissingQuery)?;

        let mut phrase = first.as_ref().to_string();
        for arg in args {
            phrase.push(' ');
            phrase.push_str(arg.as_ref());
        }

        Ok(Self { phrase })
    }

    /// The joined phrase before encoding
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The phrase percent-encoded for use as a single query-parameter value
    pub fn encoded(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.phrase)
    }

    /// Full search URL against the given registry base URL
    pub fn search_url(&self, registry_url: &str) -> String {
        format!(
            "{}{}?limit={}&offset={}&q={}",
            registry_url.trim_end_matches('/'),
            SEARCH_PATH,
            SEARCH_LIMIT,
            SEARCH_OFFSET,
            self.encoded()
        )
    }
}
