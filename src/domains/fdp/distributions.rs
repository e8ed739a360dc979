//! Distributions every gene dataset is offered in.

use crate::domains::graph::vocab::dcat;

/// Placeholder replaced by the gene symbol in URL templates.
pub const GENE_PLACEHOLDER: &str = "{{gene}}";

/// How a distribution is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// A page or service to browse (`dcat:accessURL`).
    Access,
    /// A file-like resource to fetch (`dcat:downloadURL`).
    Download,
}

impl AccessKind {
    pub fn predicate(self) -> &'static str {
        match self {
            Self::Access => dcat::ACCESS_URL,
            Self::Download => dcat::DOWNLOAD_URL,
        }
    }
}

/// A known distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub media_type: &'static str,
    pub access: AccessKind,
    /// Path relative to the instance URL.
    pub template: &'static str,
}

impl DistributionSpec {
    /// The distribution's URL on a given instance for a gene.
    pub fn url(&self, instance_url: &str, gene: &str) -> String {
        format!(
            "{}/{}",
            instance_url.trim_end_matches('/'),
            self.template.replace(GENE_PLACEHOLDER, gene)
        )
    }

    pub fn media_type_iri(&self) -> String {
        format!("https://www.iana.org/assignments/media-types/{}", self.media_type)
    }
}

pub const DISTRIBUTIONS: &[DistributionSpec] = &[
    DistributionSpec {
        key: "html",
        label: "LOVD web interface",
        media_type: "text/html",
        access: AccessKind::Access,
        template: "genes/{{gene}}",
    },
    DistributionSpec {
        key: "json/v1",
        label: "LOVD legacy JSON API",
        media_type: "application/json",
        access: AccessKind::Download,
        template: "api/rest.php/variants/{{gene}}?format=application/json",
    },
];

/// Look a distribution up by key.
pub fn find(key: &str) -> Option<&'static DistributionSpec> {
    DISTRIBUTIONS.iter().find(|d| d.key == key)
}
