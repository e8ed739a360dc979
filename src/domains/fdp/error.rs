//! Request outcomes other than success.

use axum::http::StatusCode;
use thiserror::Error;

use crate::domains::routing::MalformedPath;

/// Why a request could not produce a graph.
///
/// Every variant ends the request; no partial documents are returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The path matched no known resource shape.
    #[error("{0}")]
    Malformed(String),

    /// A catalog, dataset or distribution does not exist.
    #[error("{0}")]
    NotFound(String),

    /// An upstream service was unreachable or sent unusable data.
    #[error("{0}")]
    Upstream(String),
}

impl ResolveError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// HTTP status for this outcome.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MalformedPath> for ResolveError {
    fn from(err: MalformedPath) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ResolveError::Malformed("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ResolveError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ResolveError::upstream("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_malformed_path() {
        let err: ResolveError = MalformedPath {
            path: "catalog".to_string(),
        }
        .into();
        assert_eq!(
            err,
            ResolveError::Malformed("Could not parse requested URL '/catalog'.".to_string())
        );
    }
}
