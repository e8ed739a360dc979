//! Client for the LOVD registry-index service.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::instrument;

use super::error::UpstreamError;
use super::records::InstanceSummary;
use super::source::{JsonSource, fetch_cached};
use crate::domains::cache::{CacheKey, CacheSource, CacheStore};
use crate::domains::registry::Instance;

/// Answers "which genes does instance X hold" via
/// `GET <base>/locations/<registry id>/genes[/<gene>]`.
#[derive(Clone)]
pub struct RegistryIndexClient {
    base_url: String,
    source: Arc<dyn JsonSource>,
    cache: CacheStore,
    ttl: Duration,
}

impl RegistryIndexClient {
    pub fn new(
        base_url: impl Into<String>,
        source: Arc<dyn JsonSource>,
        cache: CacheStore,
        ttl: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            source,
            cache,
            ttl,
        }
    }

    /// Fetch (or load from cache) the summary for an instance.
    ///
    /// With a gene, the service is asked about that gene only and the answer
    /// must list at least one gene.
    #[instrument(skip(self, instance), fields(catalog = %instance.identifier))]
    pub async fn fetch_instance_summary(
        &self,
        instance: &Instance,
        gene: Option<&str>,
    ) -> Result<InstanceSummary, UpstreamError> {
        let url = self.summary_url(&instance.registry_id, gene)?;
        let key = CacheKey::new(&instance.identifier, gene, CacheSource::Index);

        fetch_cached(
            &self.cache,
            self.ttl,
            self.source.as_ref(),
            &key,
            &url,
            |value| InstanceSummary::from_value(value, gene.is_some()),
        )
        .await
    }

    fn summary_url(&self, registry_id: &str, gene: Option<&str>) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| UpstreamError::invalid_url(&self.base_url, e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| UpstreamError::invalid_url(&self.base_url, "cannot be a base"))?;
            segments
                .pop_if_empty()
                .extend(["locations", registry_id, "genes"]);
            if let Some(gene) = gene {
                segments.push(gene);
            }
        }
        Ok(url)
    }
}
