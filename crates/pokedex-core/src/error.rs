//! Fetch Errors
//!
//! The client only knows one failure: the fetch did not produce usable data.
//! Network errors, HTTP error statuses and malformed bodies all land here.

use std::fmt::Display;

use thiserror::Error;

/// A failed list or detail fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch failed for {url}: {reason}")]
pub struct FetchError {
    url: String,
    reason: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, reason: impl Display) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// URL of the request that failed
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Transport or decode message behind the failure
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
