//! FAIR Data Point server and its wiring.
//!
//! This module builds the instance registry, the cache and both upstream
//! clients from configuration and hands them to the resolver. The transport
//! layer talks to nothing else.

use std::sync::Arc;

use reqwest::Url;
use tracing::{info, warn};

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::cache::CacheStore;
use crate::domains::fdp::{FdpResponse, FdpService, ResolveRequest};
use crate::domains::registry::InstanceRegistry;
use crate::domains::upstream::{
    HttpSource, InstanceNativeClient, JsonSource, RegistryIndexClient,
};

/// The service handler shared by every request.
#[derive(Clone)]
pub struct FdpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Resolver for catalog requests.
    service: FdpService,
}

impl FdpServer {
    /// Create a server, fetching upstream data over HTTP.
    pub fn new(config: Config) -> Result<Self> {
        let source = HttpSource::new(&config.upstream)?;
        Self::with_source(config, Arc::new(source))
    }

    /// Create a server on top of an arbitrary JSON source.
    pub fn with_source(config: Config, source: Arc<dyn JsonSource>) -> Result<Self> {
        if let Some(base_url) = &config.server.base_url {
            Url::parse(base_url)
                .map_err(|e| Error::config(format!("FDP_BASE_URL '{}': {}", base_url, e)))?;
        }
        Url::parse(&config.upstream.index_url).map_err(|e| {
            Error::config(format!(
                "FDP_INDEX_URL '{}': {}",
                config.upstream.index_url, e
            ))
        })?;

        let registry = Arc::new(InstanceRegistry::from_ids(&config.registry.instances)?);
        if registry.is_empty() {
            warn!("FDP_INSTANCES not set - the catalog list will be empty.");
        } else {
            info!("Registered {} LOVD instance(s)", registry.len());
        }

        if let Err(e) = std::fs::create_dir_all(&config.cache.dir) {
            warn!(
                "Cache directory {} is not usable, responses will not be cached: {}",
                config.cache.dir.display(),
                e
            );
        }
        let cache = CacheStore::new(config.cache.dir.clone());
        let ttl = config.cache.ttl();

        let index = RegistryIndexClient::new(
            config.upstream.index_url.clone(),
            source.clone(),
            cache.clone(),
            ttl,
        );
        let native = InstanceNativeClient::new(source, cache, ttl);

        Ok(Self {
            config: Arc::new(config),
            service: FdpService::new(registry, index, native),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Resolve one catalog request.
    pub async fn resolve(&self, request: &ResolveRequest) -> FdpResponse {
        self.service.resolve(request).await
    }
}
