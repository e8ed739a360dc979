//! Client for an instance's own LOVD REST API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::instrument;

use super::error::UpstreamError;
use super::records::GeneRecord;
use super::source::{JsonSource, fetch_cached};
use crate::domains::cache::{CacheKey, CacheSource, CacheStore};
use crate::domains::registry::Instance;

/// Fetches gene details via
/// `GET <instance url>/api/rest/genes/<gene>?format=application/json`.
#[derive(Clone)]
pub struct InstanceNativeClient {
    source: Arc<dyn JsonSource>,
    cache: CacheStore,
    ttl: Duration,
}

impl InstanceNativeClient {
    pub fn new(source: Arc<dyn JsonSource>, cache: CacheStore, ttl: Duration) -> Self {
        Self { source, cache, ttl }
    }

    #[instrument(skip(self, instance, instance_url), fields(catalog = %instance.identifier))]
    pub async fn fetch_gene_record(
        &self,
        instance: &Instance,
        instance_url: &str,
        gene: &str,
    ) -> Result<GeneRecord, UpstreamError> {
        let url = gene_url(instance_url, gene)?;
        let key = CacheKey::new(&instance.identifier, Some(gene), CacheSource::Native);

        fetch_cached(
            &self.cache,
            self.ttl,
            self.source.as_ref(),
            &key,
            &url,
            GeneRecord::from_value,
        )
        .await
    }
}

fn gene_url(instance_url: &str, gene: &str) -> Result<Url, UpstreamError> {
    let mut url = Url::parse(instance_url)
        .map_err(|e| UpstreamError::invalid_url(instance_url, e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| UpstreamError::invalid_url(instance_url, "cannot be a base"))?
        .pop_if_empty()
        .extend(["api", "rest", "genes", gene]);
    url.set_query(Some("format=application/json"));
    Ok(url)
}
