//! Shared pieces of every catalog document: resource IRIs, boilerplate
//! properties and the timestamp floor.

use chrono::{DateTime, TimeDelta, Utc};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::domains::graph::vocab::{datacite, dcterms, fdp, foaf, ldp};
use crate::domains::graph::{Literal, Node, Term};

/// 2023-08-02T00:00:00Z, the day this service went live.
const SERVICE_EPOCH_SECS: i64 = 1_690_934_400;

const PUBLISHER_IRI: &str = "https://www.lovd.nl/";
const PUBLISHER_NAME: &str = "Leiden Open Variation Database (LOVD)";
const LICENSE_IRI: &str = "https://creativecommons.org/licenses/by/4.0/";
const LANGUAGE_IRI: &str = "http://id.loc.gov/vocabulary/iso639-1/en";

/// Characters escaped inside one IRI path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Launch date of the service; no issued/modified date is ever earlier.
pub fn service_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(SERVICE_EPOCH_SECS)
}

/// Clamp an upstream timestamp to the service epoch.
pub fn not_before_epoch(value: DateTime<Utc>) -> DateTime<Utc> {
    value.max(service_epoch())
}

/// Builds resource IRIs under the public base URL.
#[derive(Debug, Clone)]
pub struct ResourceIris {
    base: String,
}

impl ResourceIris {
    pub fn new(base: &str) -> Self {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn root(&self) -> String {
        self.base.clone()
    }

    pub fn catalogs(&self) -> String {
        format!("{}catalogs", self.base)
    }

    pub fn catalog(&self, catalog: &str) -> String {
        format!("{}catalog/{}", self.base, catalog)
    }

    pub fn datasets(&self, catalog: &str) -> String {
        format!("{}/datasets", self.catalog(catalog))
    }

    pub fn dataset(&self, catalog: &str, dataset: &str) -> String {
        format!("{}/dataset/{}", self.catalog(catalog), segment(dataset))
    }

    pub fn distributions(&self, catalog: &str, dataset: &str) -> String {
        format!("{}/distributions", self.dataset(catalog, dataset))
    }

    pub fn distribution(&self, catalog: &str, dataset: &str, distribution: &str) -> String {
        // Keys such as `json/v1` keep their slashes.
        let key: Vec<String> = distribution.split('/').map(segment).collect();
        format!("{}/distribution/{}", self.dataset(catalog, dataset), key.join("/"))
    }
}

fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Descriptive fields of an entity node.
pub struct EntityMetadata<'a> {
    pub iri: String,
    pub types: &'a [&'a str],
    pub title: String,
    pub description: String,
    pub issued: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub parent: Option<String>,
}

impl EntityMetadata<'_> {
    /// The entity node with publisher, licence, identifier and dates filled in.
    pub fn into_node(self) -> Node {
        let mut node = Node::new(self.iri.as_str(), self.types.iter().copied())
            .with(dcterms::TITLE, Literal::english(self.title))
            .with(dcterms::DESCRIPTION, Literal::english(self.description))
            .with(dcterms::PUBLISHER, publisher())
            .with(dcterms::LICENSE, Term::iri(LICENSE_IRI))
            .with(dcterms::LANGUAGE, Term::iri(LANGUAGE_IRI))
            .with(fdp::METADATA_IDENTIFIER, identifier(&self.iri))
            .with(dcterms::ISSUED, Literal::date_time(self.issued))
            .with(dcterms::MODIFIED, Literal::date_time(self.modified))
            .with(fdp::METADATA_ISSUED, Literal::date_time(self.issued))
            .with(fdp::METADATA_MODIFIED, Literal::date_time(self.modified));

        if let Some(parent) = self.parent {
            node = node.with(dcterms::IS_PART_OF, Term::Iri(parent));
        }
        node
    }
}

/// LDP container listing an entity's children.
pub fn container(
    iri: String,
    title: &str,
    membership_resource: String,
    member_relation: &str,
    members: Vec<String>,
) -> Node {
    Node::new(iri, [ldp::DIRECT_CONTAINER])
        .with(dcterms::TITLE, Literal::english(title))
        .with(ldp::MEMBERSHIP_RESOURCE, Term::Iri(membership_resource))
        .with(ldp::HAS_MEMBER_RELATION, Term::iri(member_relation))
        .with(ldp::CONTAINS, Term::IriList(members))
}

fn publisher() -> Node {
    Node::new(PUBLISHER_IRI, [foaf::AGENT]).with(foaf::NAME, Literal::plain(PUBLISHER_NAME))
}

fn identifier(iri: &str) -> Node {
    Node::new(format!("{}#identifier", iri), [datacite::IDENTIFIER])
        .with(dcterms::IDENTIFIER, Literal::plain(iri))
}
