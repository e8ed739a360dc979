//! Transport layer: the HTTP front controller.
//!
//! Cleans the request path, picks the output format, hands the request to
//! the resolver and renders its outcome as linked data or a JSON error body.

mod config;
mod error;
mod format;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use format::OutputFormat;
pub use http::HttpTransport;
