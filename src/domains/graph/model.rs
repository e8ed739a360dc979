//! In-memory graph documents.

use chrono::{DateTime, SecondsFormat, Utc};

use super::vocab::xsd;

/// A literal value with an optional datatype or language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: String,
    pub datatype: Option<String>,
    pub language: Option<String>,
}

impl Literal {
    /// Plain string literal.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// English-language text.
    pub fn english(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: Some("en".to_string()),
        }
    }

    /// `xsd:dateTime` literal, second precision, UTC.
    pub fn date_time(value: DateTime<Utc>) -> Self {
        Self {
            value: value.to_rfc3339_opts(SecondsFormat::Secs, true),
            datatype: Some(xsd::DATE_TIME.to_string()),
            language: None,
        }
    }
}

/// Object of a node property.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Iri(String),
    Literal(Literal),
    Node(Box<Node>),
    IriList(Vec<String>),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_iri_list(&self) -> Option<&[String]> {
        match self {
            Self::IriList(iris) => Some(iris),
            _ => None,
        }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Node> for Term {
    fn from(node: Node) -> Self {
        Self::Node(Box::new(node))
    }
}

/// A subject with its types and ordered properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub types: Vec<String>,
    pub properties: Vec<(String, Term)>,
}

impl Node {
    pub fn new<'a>(id: impl Into<String>, types: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            id: id.into(),
            types: types.into_iter().map(str::to_string).collect(),
            properties: Vec::new(),
        }
    }

    /// Append a property.
    pub fn with(mut self, predicate: &str, term: impl Into<Term>) -> Self {
        self.properties.push((predicate.to_string(), term.into()));
        self
    }

    /// First value of `predicate`, if any.
    pub fn get(&self, predicate: &str) -> Option<&Term> {
        self.properties
            .iter()
            .find(|(p, _)| p == predicate)
            .map(|(_, term)| term)
    }

    pub fn has_type(&self, iri: &str) -> bool {
        self.types.iter().any(|t| t == iri)
    }
}

/// An ordered list of nodes; the first is the requested entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphDocument {
    nodes: Vec<Node>,
}

impl GraphDocument {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove the entity node, keeping only its child container.
    pub fn into_children(mut self) -> Self {
        if !self.nodes.is_empty() {
            self.nodes.remove(0);
        }
        self
    }
}
