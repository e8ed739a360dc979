//! One gene database as a `dcat:Dataset`, with its distributions.

use chrono::{DateTime, Utc};

use super::context::{Assembly, Context};
use super::distributions::DISTRIBUTIONS;
use super::error::ResolveError;
use super::metadata::{EntityMetadata, container, not_before_epoch, service_epoch};
use crate::domains::graph::vocab::dcat;
use crate::domains::graph::{GraphDocument, Literal, Term};
use crate::domains::upstream::GeneRecord;

pub async fn assemble(
    ctx: &Context<'_>,
    catalog: &str,
    gene: &str,
) -> Result<Assembly, ResolveError> {
    let instance = ctx.instance(catalog)?;
    ctx.require_gene(instance, gene).await?;
    if !ctx.emit_body {
        return Ok(Assembly::Confirmed);
    }

    let summary = ctx.summary(instance, Some(gene)).await?;
    let record = ctx.gene_record(instance, &summary.url, gene).await?;
    let (issued, modified) = gene_dates(&record);

    let distributions: Vec<String> = DISTRIBUTIONS
        .iter()
        .map(|d| ctx.iris.distribution(catalog, gene, d.key))
        .collect();

    let full_name = record
        .name
        .as_deref()
        .map(|name| format!(" ({})", name))
        .unwrap_or_default();

    let node = EntityMetadata {
        iri: ctx.iris.dataset(catalog, gene),
        types: &[dcat::DATASET, dcat::RESOURCE],
        title: format!("{} gene variant database", gene),
        description: format!(
            "Variants in the {}{} gene, as shared by the LOVD instance at {}.",
            gene, full_name, summary.url
        ),
        issued,
        modified,
        parent: Some(ctx.iris.catalog(catalog)),
    }
    .into_node()
    .with(dcat::KEYWORD, Literal::plain(gene))
    .with(dcat::HAS_DISTRIBUTION, Term::IriList(distributions.clone()));

    let list = container(
        ctx.iris.distributions(catalog, gene),
        "Distributions",
        ctx.iris.dataset(catalog, gene),
        dcat::HAS_DISTRIBUTION,
        distributions,
    );

    Ok(Assembly::Document(GraphDocument::new(vec![node, list])))
}

/// Issued and modified dates of a gene database, never before the service
/// epoch. Without an upstream update date, "modified" is now.
pub fn gene_dates(record: &GeneRecord) -> (DateTime<Utc>, DateTime<Utc>) {
    let issued = record
        .created
        .map(not_before_epoch)
        .unwrap_or_else(service_epoch);
    let modified = record
        .updated
        .map(not_before_epoch)
        .unwrap_or_else(Utc::now);
    (issued, modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(created: Option<(i32, u32, u32)>, updated: Option<(i32, u32, u32)>) -> GeneRecord {
        let at = |(y, m, d): (i32, u32, u32)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        GeneRecord {
            id: Some("BRCA1".to_string()),
            name: None,
            created: created.map(at),
            updated: updated.map(at),
        }
    }

    #[test]
    fn test_gene_dates_floor_old_values() {
        let (issued, modified) = gene_dates(&record(Some((2009, 1, 1)), Some((2012, 6, 1))));
        assert_eq!(issued, service_epoch());
        assert_eq!(modified, service_epoch());
    }

    #[test]
    fn test_gene_dates_keep_recent_values() {
        let (issued, modified) = gene_dates(&record(Some((2024, 2, 1)), Some((2025, 3, 1))));
        assert_eq!(issued, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(modified, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_gene_dates_without_upstream_dates() {
        let before = Utc::now();
        let (issued, modified) = gene_dates(&record(None, None));
        assert_eq!(issued, service_epoch());
        assert!(modified >= before);
    }
}
