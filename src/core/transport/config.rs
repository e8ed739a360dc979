//! HTTP front controller configuration.

use serde::{Deserialize, Serialize};

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable permissive CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Load the listener config from `FDP_HTTP_*` environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("FDP_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let host = std::env::var("FDP_HTTP_HOST").unwrap_or_else(|_| default_host());
        let enable_cors = std::env::var("FDP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);
        Self {
            port,
            host,
            enable_cors,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this listener for logging.
    pub fn description(&self) -> String {
        let cors = if self.enable_cors { "enabled" } else { "disabled" };
        format!("HTTP on {} (CORS {})", self.address(), cors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address() {
        let config = HttpConfig::default();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert!(config.description().contains("CORS enabled"));
    }
}
