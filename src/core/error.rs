//! Error types for service startup.
//!
//! Request-level failures never reach this type: the resolver turns them
//! into a status code and message.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::registry::RegistryError;
use crate::domains::upstream::UpstreamError;

/// A specialized Result type for service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the service.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured instance list could not be registered.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The upstream HTTP client could not be built.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// The HTTP listener failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_converts() {
        let error: Error = RegistryError::EmptyId.into();
        assert!(matches!(error, Error::Registry(_)));
        assert!(error.to_string().starts_with("Registry error"));
    }

    #[test]
    fn test_config_error_message() {
        let error = Error::config("bad base URL");
        assert_eq!(error.to_string(), "Configuration error: bad base URL");
    }
}
