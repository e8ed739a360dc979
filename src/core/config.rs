//! Configuration management for the FAIR Data Point.
//!
//! This module provides a centralized configuration structure that is
//! populated from defaults and then from `FDP_*` environment variables
//! (a `.env` file is honoured).

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Fourteen days.
const DEFAULT_CACHE_TTL_SECS: u64 = 14 * 24 * 60 * 60;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP front controller configuration.
    pub http: HttpConfig,

    /// Upstream service configuration.
    pub upstream: UpstreamConfig,

    /// On-disk cache configuration.
    pub cache: CacheConfig,

    /// Registered LOVD instances.
    pub registry: RegistryConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the service as it appears in logs.
    pub name: String,

    /// The version of the service.
    pub version: String,

    /// Public base URL resource IRIs are minted under.
    /// If None, it is derived from each request's `Host` header.
    pub base_url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `FDP_LOG_LEVEL` alone, ahead of the rest of the configuration.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = std::env::var("FDP_LOG_LEVEL") {
            config.level = level;
        }
        config
    }
}

/// Configuration for the registry-index and instance-native services.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the registry-index service.
    pub index_url: String,

    /// Per-request timeout. None means requests are never cut short.
    pub timeout_secs: Option<u64>,

    /// User agent sent with every upstream request.
    pub user_agent: String,

    /// Optional HTTP(S) proxy, possibly with embedded credentials.
    pub proxy_url: Option<String>,
}

/// Custom Debug implementation to keep proxy credentials out of logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("index_url", &self.index_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("proxy_url", &self.proxy_url.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration for the upstream payload cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding one JSON file per cached payload.
    pub dir: PathBuf,

    /// Maximum age of a usable cache entry, in seconds.
    pub ttl_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// The registry ids of the LOVD instances to describe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub instances: Vec<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            index_url: "https://api.lovd.nl/v2".to_string(),
            timeout_secs: None,
            user_agent: "fdp.lovd.nl".to_string(),
            proxy_url: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("cache"),
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "lovd-fdp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                base_url: None,
            },
            logging: LoggingConfig::default(),
            http: HttpConfig::default(),
            upstream: UpstreamConfig::default(),
            cache: CacheConfig::default(),
            registry: RegistryConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `FDP_`.
    /// For example: `FDP_INSTANCES`, `FDP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("FDP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(base_url) = std::env::var("FDP_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.server.base_url = Some(base_url.trim().to_string());
            }
        }

        config.logging = LoggingConfig::from_env();

        config.http = HttpConfig::from_env();

        if let Ok(index_url) = std::env::var("FDP_INDEX_URL") {
            config.upstream.index_url = index_url;
        }

        if let Ok(timeout) = std::env::var("FDP_UPSTREAM_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.upstream.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring invalid FDP_UPSTREAM_TIMEOUT_SECS: {}", timeout),
            }
        }

        if let Ok(user_agent) = std::env::var("FDP_USER_AGENT") {
            config.upstream.user_agent = user_agent;
        }

        if let Ok(proxy) = std::env::var("FDP_PROXY_URL") {
            if !proxy.trim().is_empty() {
                config.upstream.proxy_url = Some(proxy.trim().to_string());
                info!("Upstream requests will use the configured proxy");
            }
        }

        if let Ok(dir) = std::env::var("FDP_CACHE_DIR") {
            config.cache.dir = PathBuf::from(dir);
        }

        if let Ok(ttl) = std::env::var("FDP_CACHE_TTL_SECS") {
            match ttl.parse() {
                Ok(secs) => config.cache.ttl_secs = secs,
                Err(_) => warn!("Ignoring invalid FDP_CACHE_TTL_SECS: {}", ttl),
            }
        }

        if let Ok(instances) = std::env::var("FDP_INSTANCES") {
            config.registry.instances = parse_instance_list(&instances);
        }

        config
    }
}

/// Split a comma- or whitespace-separated list of registry ids.
fn parse_instance_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
