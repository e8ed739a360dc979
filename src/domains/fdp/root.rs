//! The FAIR Data Point itself and its catalog list.

use chrono::{DateTime, Utc};

use super::context::{Assembly, Context};
use super::error::ResolveError;
use super::metadata::{EntityMetadata, container, service_epoch};
use crate::domains::graph::vocab::{dcat, fdp};
use crate::domains::graph::{GraphDocument, Term};

pub async fn assemble(ctx: &Context<'_>) -> Result<Assembly, ResolveError> {
    if !ctx.emit_body {
        return Ok(Assembly::Confirmed);
    }

    // Every instance must still resolve upstream; the newest update dates
    // the whole service.
    let mut modified: Option<DateTime<Utc>> = None;
    for instance in ctx.registry.iter() {
        let summary = ctx.summary(instance, None).await?;
        modified = modified.max(summary.updated);
    }

    let catalogs: Vec<String> = ctx
        .registry
        .iter()
        .map(|instance| ctx.iris.catalog(&instance.identifier))
        .collect();

    let service = EntityMetadata {
        iri: ctx.iris.root(),
        types: &[
            fdp::FAIR_DATA_POINT,
            fdp::METADATA_SERVICE,
            dcat::DATA_SERVICE,
            dcat::RESOURCE,
        ],
        title: "LOVD FAIR Data Point".to_string(),
        description: format!(
            "FAIR Data Point describing the {} registered LOVD instance{}, \
             their gene variant databases and how to access them.",
            catalogs.len(),
            if catalogs.len() == 1 { "" } else { "s" }
        ),
        issued: service_epoch(),
        modified: modified.unwrap_or_else(Utc::now),
        parent: None,
    }
    .into_node()
    .with(fdp::METADATA_CATALOG, Term::IriList(catalogs.clone()));

    let list = container(
        ctx.iris.catalogs(),
        "Catalogs",
        ctx.iris.root(),
        fdp::METADATA_CATALOG,
        catalogs,
    );

    Ok(Assembly::Document(GraphDocument::new(vec![service, list])))
}
