//! A single distribution of a gene database.

use super::context::{Assembly, Context};
use super::dataset::gene_dates;
use super::distributions;
use super::error::ResolveError;
use super::metadata::{EntityMetadata, service_epoch};
use crate::domains::graph::vocab::dcat;
use crate::domains::graph::{GraphDocument, Term};

/// Unlike the other resources, a distribution has no children: the document
/// is one node.
pub async fn assemble(
    ctx: &Context<'_>,
    catalog: &str,
    gene: &str,
    key: &str,
) -> Result<Assembly, ResolveError> {
    let instance = ctx.instance(catalog)?;
    let spec = distributions::find(key).ok_or_else(|| {
        ResolveError::not_found(format!(
            "The distribution {} does not exist for dataset {}.",
            key, gene
        ))
    })?;
    ctx.require_gene(instance, gene).await?;
    if !ctx.emit_body {
        return Ok(Assembly::Confirmed);
    }

    let summary = ctx.summary(instance, Some(gene)).await?;
    let record = ctx.gene_record(instance, &summary.url, gene).await?;
    let (_, modified) = gene_dates(&record);

    let node = EntityMetadata {
        iri: ctx.iris.distribution(catalog, gene, key),
        types: &[dcat::DISTRIBUTION, dcat::RESOURCE],
        title: format!("{} for {}", spec.label, gene),
        description: format!(
            "The {} gene database through the {} of the LOVD instance at {}.",
            gene, spec.label, summary.url
        ),
        issued: service_epoch(),
        modified,
        parent: Some(ctx.iris.dataset(catalog, gene)),
    }
    .into_node()
    .with(dcat::MEDIA_TYPE, Term::iri(spec.media_type_iri()))
    .with(spec.access.predicate(), Term::iri(spec.url(&summary.url, gene)));

    Ok(Assembly::Document(GraphDocument::new(vec![node])))
}
