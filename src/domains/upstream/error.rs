//! Upstream-specific error types.

use thiserror::Error;

/// Errors that can occur while fetching or validating upstream data.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be built.
    #[error("Could not initialise HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A request URL could not be built.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request failed before a response arrived.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body was not valid JSON.
    #[error("Could not parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON did not have the expected shape.
    #[error("Unexpected response format: {0}")]
    Shape(#[source] serde_json::Error),

    /// A required field was absent or empty.
    #[error("Field '{0}' is missing or empty")]
    MissingField(&'static str),
}

impl UpstreamError {
    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
