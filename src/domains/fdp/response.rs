//! The outcome handed to the front controller.

use axum::http::StatusCode;

use super::error::ResolveError;
use crate::domains::graph::GraphDocument;

/// Status, error messages and (on success with a body) the document.
#[derive(Debug, Clone, PartialEq)]
pub struct FdpResponse {
    pub status: StatusCode,
    pub errors: Vec<String>,
    pub graph: Option<GraphDocument>,
}

impl FdpResponse {
    /// 200, with a document unless the body was suppressed.
    pub fn success(graph: Option<GraphDocument>) -> Self {
        Self {
            status: StatusCode::OK,
            errors: Vec::new(),
            graph,
        }
    }

    pub fn failure(error: &ResolveError) -> Self {
        Self {
            status: error.status(),
            errors: vec![error.to_string()],
            graph: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<Result<Option<GraphDocument>, ResolveError>> for FdpResponse {
    fn from(result: Result<Option<GraphDocument>, ResolveError>) -> Self {
        match result {
            Ok(graph) => Self::success(graph),
            Err(e) => Self::failure(&e),
        }
    }
}
