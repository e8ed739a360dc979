//! Request resolution: route, assemble, trim.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::context::{Assembly, Context};
use super::error::ResolveError;
use super::metadata::ResourceIris;
use super::response::FdpResponse;
use super::{catalog, dataset, distribution, root};
use crate::domains::graph::GraphDocument;
use crate::domains::registry::InstanceRegistry;
use crate::domains::routing::{RequestPath, Resource, match_route};
use crate::domains::upstream::{InstanceNativeClient, RegistryIndexClient};

/// One inbound request, as prepared by the front controller.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub path: RequestPath,

    /// Public base URL resource IRIs are built under.
    pub base_url: String,

    /// `false` for HEAD: check existence only.
    pub emit_body: bool,
}

/// Resolves catalog requests against the registry and upstream services.
#[derive(Clone)]
pub struct FdpService {
    registry: Arc<InstanceRegistry>,
    index: RegistryIndexClient,
    native: InstanceNativeClient,
}

impl FdpService {
    pub fn new(
        registry: Arc<InstanceRegistry>,
        index: RegistryIndexClient,
        native: InstanceNativeClient,
    ) -> Self {
        Self {
            registry,
            index,
            native,
        }
    }

    /// Resolve a request to a response. Never fails: every error becomes a
    /// status plus message.
    #[instrument(skip(self, request), fields(path = %request.path.display(), head = !request.emit_body))]
    pub async fn resolve(&self, request: &ResolveRequest) -> FdpResponse {
        let result = self.resolve_graph(request).await;
        match &result {
            Ok(_) => info!("Resolved"),
            Err(e @ ResolveError::Upstream(_)) => warn!("Upstream failure: {}", e),
            Err(e) => info!("Rejected ({}): {}", e.status(), e),
        }
        result.into()
    }

    async fn resolve_graph(
        &self,
        request: &ResolveRequest,
    ) -> Result<Option<GraphDocument>, ResolveError> {
        let route = match_route(&request.path.resource, &request.path.segments)?;

        let ctx = Context {
            registry: &self.registry,
            index: &self.index,
            native: &self.native,
            iris: ResourceIris::new(&request.base_url),
            emit_body: request.emit_body,
        };

        let assembly = match &route.resource {
            Resource::Root => root::assemble(&ctx).await?,
            Resource::Catalog { catalog: id } => catalog::assemble(&ctx, id).await?,
            Resource::Dataset {
                catalog: id,
                dataset: gene,
            } => dataset::assemble(&ctx, id, gene).await?,
            Resource::Distribution {
                catalog: id,
                dataset: gene,
                distribution: key,
            } => distribution::assemble(&ctx, id, gene, key).await?,
        };

        Ok(match assembly {
            Assembly::Confirmed => None,
            Assembly::Document(document) if route.children_only => {
                Some(document.into_children())
            }
            Assembly::Document(document) => Some(document),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::domains::cache::CacheStore;
    use crate::domains::graph::vocab::{dcat, fdp, ldp};
    use crate::domains::registry::derive;
    use crate::domains::upstream::testing::StaticSource;

    const BASE: &str = "https://fdp.example.org/";
    const INDEX: &str = "https://index.example.org/v2";
    const TTL: Duration = Duration::from_secs(60);

    fn source() -> StaticSource {
        StaticSource::default()
            .with(
                "https://index.example.org/v2/locations/00001/genes",
                json!({
                    "url": "https://lovd.example.org/shared/",
                    "name": "Shared LOVD",
                    "genes": ["BRCA1", "TP53"],
                    "updated_date": "2024-03-01 10:00:00"
                }),
            )
            .with(
                "https://index.example.org/v2/locations/00002/genes",
                json!({
                    "url": "https://lovd.example.com/",
                    "genes": [],
                    "updated_date": "2024-05-01"
                }),
            )
            .with(
                "https://index.example.org/v2/locations/00001/genes/BRCA1",
                json!({"url": "https://lovd.example.org/shared/", "genes": ["BRCA1"]}),
            )
            .with(
                "https://lovd.example.org/shared/api/rest/genes/BRCA1?format=application/json",
                json!({
                    "id": "BRCA1",
                    "name": "BRCA1 DNA repair associated",
                    "created_date": "2012-06-01 00:00:00",
                    "updated_date": "2024-02-01 12:00:00"
                }),
            )
    }

    fn service(source: StaticSource, dir: &TempDir) -> (FdpService, Arc<StaticSource>) {
        let source = Arc::new(source);
        let cache = CacheStore::new(dir.path());
        let registry = InstanceRegistry::from_ids(["00001", "00002"]).unwrap();
        let index = RegistryIndexClient::new(INDEX, source.clone(), cache.clone(), TTL);
        let native = InstanceNativeClient::new(source.clone(), cache, TTL);
        (
            FdpService::new(Arc::new(registry), index, native),
            source,
        )
    }

    fn get(path: &str) -> ResolveRequest {
        ResolveRequest {
            path: RequestPath::parse(path),
            base_url: BASE.to_string(),
            emit_body: true,
        }
    }

    fn head(path: &str) -> ResolveRequest {
        ResolveRequest {
            emit_body: false,
            ..get(path)
        }
    }

    #[tokio::test]
    async fn test_root_lists_catalogs() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);

        let response = service.resolve(&get("/")).await;
        assert_eq!(response.status, StatusCode::OK);
        let graph = response.graph.unwrap();
        assert_eq!(graph.len(), 2);

        let root = &graph.nodes()[0];
        assert_eq!(root.id, BASE);
        assert!(root.has_type(fdp::FAIR_DATA_POINT));
        assert_eq!(
            root.get(fdp::METADATA_CATALOG).and_then(|t| t.as_iri_list()),
            Some(
                &[
                    format!("{}catalog/{}", BASE, derive("00001")),
                    format!("{}catalog/{}", BASE, derive("00002")),
                ][..]
            )
        );
        // Latest update across both instances.
        assert_eq!(
            root.get(fdp::METADATA_MODIFIED)
                .and_then(|t| t.as_literal())
                .map(|l| l.value.as_str()),
            Some("2024-05-01T00:00:00Z")
        );
    }

    #[tokio::test]
    async fn test_catalogs_returns_list_only() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);

        let graph = service.resolve(&get("/catalogs")).await.graph.unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.nodes()[0].id, format!("{}catalogs", BASE));
        assert!(graph.nodes()[0].has_type(ldp::DIRECT_CONTAINER));
    }

    #[tokio::test]
    async fn test_dataset_list_matches_genes() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);
        let catalog = derive("00001");

        let response = service
            .resolve(&get(&format!("/catalog/{}/datasets", catalog)))
            .await;
        let graph = response.graph.unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(
            graph.nodes()[0]
                .get(ldp::CONTAINS)
                .and_then(|t| t.as_iri_list()),
            Some(
                &[
                    format!("{}catalog/{}/dataset/BRCA1", BASE, catalog),
                    format!("{}catalog/{}/dataset/TP53", BASE, catalog),
                ][..]
            )
        );
    }

    #[tokio::test]
    async fn test_unknown_catalog_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (service, source) = service(source(), &dir);

        let response = service.resolve(&get("/catalog/nope")).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.errors, vec!["The catalog nope does not exist."]);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_gene_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);
        let catalog = derive("00001");

        let response = service
            .resolve(&get(&format!("/catalog/{}/dataset/MYH7", catalog)))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.errors[0].contains("does not exist in catalog"));
    }

    #[tokio::test]
    async fn test_malformed_path() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);

        let response = service.resolve(&get("/catalog")).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.errors,
            vec!["Could not parse requested URL '/catalog'."]
        );
    }

    #[tokio::test]
    async fn test_invalid_upstream_payload_names_catalog() {
        let dir = TempDir::new().unwrap();
        let broken = StaticSource::default().with(
            "https://index.example.org/v2/locations/00001/genes",
            json!({"genes": ["BRCA1"]}),
        );
        let (service, _) = service(broken, &dir);
        let catalog = derive("00001");

        let response = service.resolve(&get(&format!("/catalog/{}", catalog))).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.errors,
            vec![format!(
                "Could not retrieve information about catalog {}.",
                catalog
            )]
        );
        // Nothing unvalidated is cached.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_distribution_download_url() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);
        let catalog = derive("00001");

        let response = service
            .resolve(&get(&format!(
                "/catalog/{}/dataset/BRCA1/distribution/json/v1",
                catalog
            )))
            .await;
        let graph = response.graph.unwrap();
        assert_eq!(graph.len(), 1);
        let node = &graph.nodes()[0];
        assert!(node.has_type(dcat::DISTRIBUTION));
        assert_eq!(
            node.get(dcat::DOWNLOAD_URL).and_then(|t| t.as_iri()),
            Some(
                "https://lovd.example.org/shared/api/rest.php/variants/BRCA1?format=application/json"
            )
        );
    }

    #[tokio::test]
    async fn test_dataset_uses_gene_dates() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);
        let catalog = derive("00001");

        let graph = service
            .resolve(&get(&format!("/catalog/{}/dataset/BRCA1", catalog)))
            .await
            .graph
            .unwrap();
        assert_eq!(graph.len(), 2);
        let dataset = &graph.nodes()[0];
        // Created before the service existed: floored to the epoch.
        assert_eq!(
            dataset
                .get(fdp::METADATA_ISSUED)
                .and_then(|t| t.as_literal())
                .map(|l| l.value.as_str()),
            Some("2023-08-02T00:00:00Z")
        );
        assert_eq!(
            dataset
                .get(fdp::METADATA_MODIFIED)
                .and_then(|t| t.as_literal())
                .map(|l| l.value.as_str()),
            Some("2024-02-01T12:00:00Z")
        );
    }

    #[tokio::test]
    async fn test_head_confirms_without_building() {
        let dir = TempDir::new().unwrap();
        let (service, source) = service(source(), &dir);

        let response = service.resolve(&head("/")).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.graph.is_none());
        assert!(source.calls().is_empty());

        let response = service.resolve(&head("/catalog/nope")).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_head_on_missing_gene_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);
        let catalog = derive("00001");

        let response = service
            .resolve(&head(&format!("/catalog/{}/dataset/MYH7", catalog)))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.graph.is_none());
    }

    fn literal<'a>(node: &'a crate::domains::graph::Node, predicate: &str) -> Option<&'a str> {
        node.get(predicate)
            .and_then(|t| t.as_literal())
            .map(|l| l.value.as_str())
    }

    #[tokio::test]
    async fn test_distribution_issued_is_service_epoch() {
        let dir = TempDir::new().unwrap();
        let recent = source().with(
            "https://lovd.example.org/shared/api/rest/genes/BRCA1?format=application/json",
            json!({
                "id": "BRCA1",
                "created_date": "2024-06-01 00:00:00",
                "updated_date": "2024-07-01 00:00:00"
            }),
        );
        let (service, _) = service(recent, &dir);
        let catalog = derive("00001");

        let graph = service
            .resolve(&get(&format!(
                "/catalog/{}/dataset/BRCA1/distribution/html",
                catalog
            )))
            .await
            .graph
            .unwrap();
        let node = &graph.nodes()[0];
        assert_eq!(
            literal(node, fdp::METADATA_ISSUED),
            Some("2023-08-02T00:00:00Z")
        );
        assert_eq!(
            literal(node, fdp::METADATA_MODIFIED),
            Some("2024-07-01T00:00:00Z")
        );

        // The dataset itself keeps the gene's creation date.
        let graph = service
            .resolve(&get(&format!("/catalog/{}/dataset/BRCA1", catalog)))
            .await
            .graph
            .unwrap();
        assert_eq!(
            literal(&graph.nodes()[0], fdp::METADATA_ISSUED),
            Some("2024-06-01T00:00:00Z")
        );
    }

    #[tokio::test]
    async fn test_unknown_distribution_key_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);
        let catalog = derive("00001");

        let response = service
            .resolve(&get(&format!(
                "/catalog/{}/dataset/BRCA1/distribution/pdf",
                catalog
            )))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            response.errors,
            vec!["The distribution pdf does not exist for dataset BRCA1."]
        );
        assert!(response.graph.is_none());
    }

    #[tokio::test]
    async fn test_distribution_list_is_one_container() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);
        let catalog = derive("00001");

        let response = service
            .resolve(&get(&format!(
                "/catalog/{}/dataset/BRCA1/distributions",
                catalog
            )))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        let graph = response.graph.unwrap();
        assert_eq!(graph.len(), 1);
        let list = &graph.nodes()[0];
        assert!(list.has_type(ldp::DIRECT_CONTAINER));
        assert_eq!(
            list.id,
            format!("{}catalog/{}/dataset/BRCA1/distributions", BASE, catalog)
        );
        assert_eq!(
            list.get(ldp::CONTAINS).and_then(|t| t.as_iri_list()),
            Some(
                &[
                    format!("{}catalog/{}/dataset/BRCA1/distribution/html", BASE, catalog),
                    format!("{}catalog/{}/dataset/BRCA1/distribution/json/v1", BASE, catalog),
                ][..]
            )
        );
    }

    #[tokio::test]
    async fn test_html_distribution_access_url() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service(source(), &dir);
        let catalog = derive("00001");

        let graph = service
            .resolve(&get(&format!(
                "/catalog/{}/dataset/BRCA1/distribution/html",
                catalog
            )))
            .await
            .graph
            .unwrap();
        assert_eq!(graph.len(), 1);
        let node = &graph.nodes()[0];
        assert_eq!(
            node.get(dcat::ACCESS_URL).and_then(|t| t.as_iri()),
            Some("https://lovd.example.org/shared/genes/BRCA1")
        );
        assert!(node.get(dcat::DOWNLOAD_URL).is_none());
    }

    #[tokio::test]
    async fn test_head_on_dataset_skips_native_api() {
        let dir = TempDir::new().unwrap();
        let (service, source) = service(source(), &dir);
        let catalog = derive("00001");

        let response = service
            .resolve(&head(&format!("/catalog/{}/dataset/BRCA1", catalog)))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.graph.is_none());
        assert!(!source.calls().is_empty());
        assert!(
            !source
                .calls()
                .iter()
                .any(|url| url.contains("api/rest/genes"))
        );
    }
}
