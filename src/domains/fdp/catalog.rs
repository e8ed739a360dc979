//! One LOVD instance as a `dcat:Catalog`, with its gene datasets.

use chrono::Utc;

use super::context::{Assembly, Context};
use super::error::ResolveError;
use super::metadata::{EntityMetadata, container, service_epoch};
use crate::domains::graph::vocab::dcat;
use crate::domains::graph::{GraphDocument, Term};

pub async fn assemble(ctx: &Context<'_>, catalog: &str) -> Result<Assembly, ResolveError> {
    let instance = ctx.instance(catalog)?;
    if !ctx.emit_body {
        return Ok(Assembly::Confirmed);
    }

    let summary = ctx.summary(instance, None).await?;
    let datasets: Vec<String> = summary
        .genes
        .iter()
        .map(|gene| ctx.iris.dataset(catalog, gene))
        .collect();

    let node = EntityMetadata {
        iri: ctx.iris.catalog(catalog),
        types: &[dcat::CATALOG, dcat::RESOURCE],
        title: summary
            .name
            .clone()
            .unwrap_or_else(|| format!("LOVD instance at {}", summary.url)),
        description: format!(
            "Gene variant databases hosted by the LOVD instance at {}, \
             currently holding {} gene{}.",
            summary.url,
            datasets.len(),
            if datasets.len() == 1 { "" } else { "s" }
        ),
        issued: service_epoch(),
        modified: summary.updated.unwrap_or_else(Utc::now),
        parent: Some(ctx.iris.root()),
    }
    .into_node()
    .with(dcat::LANDING_PAGE, Term::iri(summary.url.clone()))
    .with(dcat::HAS_DATASET, Term::IriList(datasets.clone()));

    let list = container(
        ctx.iris.datasets(catalog),
        "Datasets",
        ctx.iris.catalog(catalog),
        dcat::HAS_DATASET,
        datasets,
    );

    Ok(Assembly::Document(GraphDocument::new(vec![node, list])))
}
