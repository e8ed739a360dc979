//! Per-request state shared by the assemblers.

use tracing::warn;

use super::error::ResolveError;
use super::metadata::ResourceIris;
use crate::domains::graph::GraphDocument;
use crate::domains::registry::{Instance, InstanceRegistry};
use crate::domains::upstream::{
    GeneRecord, InstanceNativeClient, InstanceSummary, RegistryIndexClient,
};

/// What an assembler produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Assembly {
    /// The full document.
    Document(GraphDocument),
    /// Body suppressed: the resource exists, nothing was built.
    Confirmed,
}

/// Borrowed view of the service for one request.
pub struct Context<'a> {
    pub registry: &'a InstanceRegistry,
    pub index: &'a RegistryIndexClient,
    pub native: &'a InstanceNativeClient,
    pub iris: ResourceIris,
    pub emit_body: bool,
}

impl<'a> Context<'a> {
    /// Look up a registered instance by catalog identifier.
    pub fn instance(&self, catalog: &str) -> Result<&'a Instance, ResolveError> {
        self.registry.get(catalog).ok_or_else(|| {
            ResolveError::not_found(format!("The catalog {} does not exist.", catalog))
        })
    }

    /// Registry-index summary for an instance, optionally for one gene.
    pub async fn summary(
        &self,
        instance: &Instance,
        gene: Option<&str>,
    ) -> Result<InstanceSummary, ResolveError> {
        self.index
            .fetch_instance_summary(instance, gene)
            .await
            .map_err(|e| {
                warn!("Registry index lookup for {} failed: {}", instance.identifier, e);
                ResolveError::upstream(match gene {
                    Some(gene) => format!(
                        "Could not retrieve information about dataset {} in catalog {}.",
                        gene, instance.identifier
                    ),
                    None => format!(
                        "Could not retrieve information about catalog {}.",
                        instance.identifier
                    ),
                })
            })
    }

    /// Fail with 404 unless the instance reports `gene`.
    pub async fn require_gene(
        &self,
        instance: &Instance,
        gene: &str,
    ) -> Result<InstanceSummary, ResolveError> {
        let summary = self.summary(instance, None).await?;
        if !summary.has_gene(gene) {
            return Err(ResolveError::not_found(format!(
                "The dataset {} does not exist in catalog {}.",
                gene, instance.identifier
            )));
        }
        Ok(summary)
    }

    /// Gene details from the instance's own API.
    pub async fn gene_record(
        &self,
        instance: &Instance,
        instance_url: &str,
        gene: &str,
    ) -> Result<GeneRecord, ResolveError> {
        self.native
            .fetch_gene_record(instance, instance_url, gene)
            .await
            .map_err(|e| {
                warn!(
                    "Gene lookup for {} at {} failed: {}",
                    gene, instance.identifier, e
                );
                ResolveError::upstream(format!(
                    "Could not retrieve gene {} from catalog {}.",
                    gene, instance.identifier
                ))
            })
    }
}
