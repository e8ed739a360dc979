//! Raw JSON retrieval and the cache read-through shared by both clients.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::UpstreamError;
use crate::core::config::UpstreamConfig;
use crate::domains::cache::{CacheKey, CacheStore};

/// Something that can GET a URL and hand back its JSON body.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<Value, UpstreamError>;
}

/// `JsonSource` backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Build the client from upstream settings (user agent, timeout, proxy).
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy).map_err(UpstreamError::Client)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(UpstreamError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn get_json(&self, url: &Url) -> Result<Value, UpstreamError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| UpstreamError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Request {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Parse {
            url: url.to_string(),
            source,
        })
    }
}

/// Cache read-through used by both upstream clients.
///
/// A cached payload is only used if it still passes `validate`; otherwise it
/// is refetched. Fresh payloads are validated before they are cached, and a
/// failed cache write never fails the fetch.
pub(crate) async fn fetch_cached<T, F>(
    cache: &CacheStore,
    ttl: Duration,
    source: &dyn JsonSource,
    key: &CacheKey,
    url: &Url,
    validate: F,
) -> Result<T, UpstreamError>
where
    F: Fn(&Value) -> Result<T, UpstreamError>,
{
    if let Some(cached) = cache.load(key, ttl).await {
        match validate(&cached) {
            Ok(record) => return Ok(record),
            Err(e) => debug!("Discarding cached {}: {}", key, e),
        }
    }

    let value = match source.get_json(url).await {
        Ok(value) => value,
        Err(e) => {
            warn!("Upstream fetch for {} failed: {}", key, e);
            return Err(e);
        }
    };

    let record = validate(&value).inspect_err(|e| {
        warn!("Upstream payload for {} rejected: {}", key, e);
    })?;
    cache.save(key, &value).await;

    Ok(record)
}
