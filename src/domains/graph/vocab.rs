//! RDF vocabulary IRIs used in catalog documents.

/// RDF vocabulary
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// XSD datatypes
pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// DCAT 2 (data catalogs)
pub mod dcat {
    pub const NS: &str = "http://www.w3.org/ns/dcat#";
    pub const CATALOG: &str = "http://www.w3.org/ns/dcat#Catalog";
    pub const DATASET: &str = "http://www.w3.org/ns/dcat#Dataset";
    pub const DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#Distribution";
    pub const RESOURCE: &str = "http://www.w3.org/ns/dcat#Resource";
    pub const DATA_SERVICE: &str = "http://www.w3.org/ns/dcat#DataService";
    pub const HAS_DATASET: &str = "http://www.w3.org/ns/dcat#dataset";
    pub const HAS_DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#distribution";
    pub const ACCESS_URL: &str = "http://www.w3.org/ns/dcat#accessURL";
    pub const DOWNLOAD_URL: &str = "http://www.w3.org/ns/dcat#downloadURL";
    pub const MEDIA_TYPE: &str = "http://www.w3.org/ns/dcat#mediaType";
    pub const LANDING_PAGE: &str = "http://www.w3.org/ns/dcat#landingPage";
    pub const KEYWORD: &str = "http://www.w3.org/ns/dcat#keyword";
}

/// Dublin Core terms
pub mod dcterms {
    pub const NS: &str = "http://purl.org/dc/terms/";
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    pub const LICENSE: &str = "http://purl.org/dc/terms/license";
    pub const LANGUAGE: &str = "http://purl.org/dc/terms/language";
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    pub const ISSUED: &str = "http://purl.org/dc/terms/issued";
    pub const MODIFIED: &str = "http://purl.org/dc/terms/modified";
    pub const IS_PART_OF: &str = "http://purl.org/dc/terms/isPartOf";
    pub const CONFORMS_TO: &str = "http://purl.org/dc/terms/conformsTo";
}

/// FAIR Data Point ontology
pub mod fdp {
    pub const NS: &str = "https://w3id.org/fdp/fdp-o#";
    pub const FAIR_DATA_POINT: &str = "https://w3id.org/fdp/fdp-o#FAIRDataPoint";
    pub const METADATA_SERVICE: &str = "https://w3id.org/fdp/fdp-o#MetadataService";
    pub const METADATA_IDENTIFIER: &str = "https://w3id.org/fdp/fdp-o#metadataIdentifier";
    pub const METADATA_ISSUED: &str = "https://w3id.org/fdp/fdp-o#metadataIssued";
    pub const METADATA_MODIFIED: &str = "https://w3id.org/fdp/fdp-o#metadataModified";
    pub const METADATA_CATALOG: &str = "https://w3id.org/fdp/fdp-o#metadataCatalog";
}

/// Linked Data Platform
pub mod ldp {
    pub const NS: &str = "http://www.w3.org/ns/ldp#";
    pub const DIRECT_CONTAINER: &str = "http://www.w3.org/ns/ldp#DirectContainer";
    pub const MEMBERSHIP_RESOURCE: &str = "http://www.w3.org/ns/ldp#membershipResource";
    pub const HAS_MEMBER_RELATION: &str = "http://www.w3.org/ns/ldp#hasMemberRelation";
    pub const CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";
}

/// FOAF
pub mod foaf {
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
}

/// DataCite ontology
pub mod datacite {
    pub const NS: &str = "http://purl.org/spar/datacite/";
    pub const IDENTIFIER: &str = "http://purl.org/spar/datacite/Identifier";
}

/// Prefixes written in Turtle output, in declaration order.
pub const PREFIXES: &[(&str, &str)] = &[
    ("dcat", dcat::NS),
    ("dcterms", dcterms::NS),
    ("datacite", datacite::NS),
    ("fdp", fdp::NS),
    ("foaf", foaf::NS),
    ("ldp", ldp::NS),
    ("rdf", rdf::NS),
    ("xsd", xsd::NS),
];
