//! Typed views of the upstream JSON documents.
//!
//! Upstream payloads are cached verbatim; these types are rebuilt from the
//! raw JSON on every read and only expose the fields the catalog needs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use super::error::UpstreamError;

/// Registry-index answer for one instance, optionally narrowed to a gene.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceSummary {
    /// Base URL of the instance itself.
    pub url: String,
    pub name: Option<String>,
    pub genes: Vec<String>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawInstanceSummary {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    genes: Option<Vec<String>>,
    #[serde(default)]
    updated_date: Option<String>,
}

impl InstanceSummary {
    /// Validate a registry-index payload.
    ///
    /// `url` must be a present, absolute URL. When a gene was requested the
    /// gene list must be non-empty as well.
    pub fn from_value(value: &Value, gene_requested: bool) -> Result<Self, UpstreamError> {
        let raw = RawInstanceSummary::deserialize(value).map_err(UpstreamError::Shape)?;

        let url = non_empty(raw.url).ok_or(UpstreamError::MissingField("url"))?;
        Url::parse(&url).map_err(|e| UpstreamError::invalid_url(&url, e.to_string()))?;

        let genes = raw.genes.unwrap_or_default();
        if gene_requested && genes.is_empty() {
            return Err(UpstreamError::MissingField("genes"));
        }

        Ok(Self {
            url,
            name: non_empty(raw.name),
            genes,
            updated: raw.updated_date.as_deref().and_then(parse_timestamp),
        })
    }

    /// Whether the instance reports the given gene.
    pub fn has_gene(&self, gene: &str) -> bool {
        self.genes.iter().any(|g| g == gene)
    }
}

/// Gene-level record from the instance's own API.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawGeneRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    created_date: Option<String>,
    #[serde(default)]
    updated_date: Option<String>,
}

impl GeneRecord {
    /// Validate an instance-native gene payload; `created_date` is required.
    pub fn from_value(value: &Value) -> Result<Self, UpstreamError> {
        let raw = RawGeneRecord::deserialize(value).map_err(UpstreamError::Shape)?;
        let created =
            non_empty(raw.created_date).ok_or(UpstreamError::MissingField("created_date"))?;

        Ok(Self {
            id: non_empty(raw.id),
            name: non_empty(raw.name),
            created: parse_timestamp(&created),
            updated: raw.updated_date.as_deref().and_then(parse_timestamp),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse the timestamp formats LOVD emits.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare dates; zone-less values
/// are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
