//! The resource route table.
//!
//! Routes are an ordered list of structural rules. A path matches a rule
//! when the resource name, segment count and literal segments all agree; the
//! first matching rule wins and anything unmatched is malformed.

use thiserror::Error;

/// The catalog resource a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Root,
    Catalog {
        catalog: String,
    },
    Dataset {
        catalog: String,
        dataset: String,
    },
    Distribution {
        catalog: String,
        dataset: String,
        distribution: String,
    },
}

/// A matched route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub resource: Resource,

    /// Only the child listing was requested: drop the entity's own node.
    pub children_only: bool,
}

/// No rule matched the request path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Could not parse requested URL '/{path}'.")]
pub struct MalformedPath {
    pub path: String,
}

#[derive(Debug, Clone, Copy)]
enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

struct RouteRule {
    name: &'static str,
    resource: &'static str,
    arity: Arity,
    literals: &'static [(usize, &'static str)],
    children_only: bool,
    build: fn(&[String]) -> Resource,
}

impl RouteRule {
    fn matches(&self, resource: &str, segments: &[String]) -> bool {
        self.resource == resource
            && self.arity.accepts(segments.len())
            && self
                .literals
                .iter()
                .all(|(index, literal)| segments.get(*index).is_some_and(|s| s == literal))
    }
}

fn root(_: &[String]) -> Resource {
    Resource::Root
}

fn catalog(segments: &[String]) -> Resource {
    Resource::Catalog {
        catalog: segments[0].clone(),
    }
}

fn dataset(segments: &[String]) -> Resource {
    Resource::Dataset {
        catalog: segments[0].clone(),
        dataset: segments[2].clone(),
    }
}

/// Distribution keys may contain `/`, so every trailing segment belongs to it.
fn distribution(segments: &[String]) -> Resource {
    Resource::Distribution {
        catalog: segments[0].clone(),
        dataset: segments[2].clone(),
        distribution: segments[4..].join("/"),
    }
}

const RULES: &[RouteRule] = &[
    RouteRule {
        name: "root",
        resource: "",
        arity: Arity::Exactly(0),
        literals: &[],
        children_only: false,
        build: root,
    },
    RouteRule {
        name: "catalogs",
        resource: "catalogs",
        arity: Arity::Exactly(0),
        literals: &[],
        children_only: true,
        build: root,
    },
    RouteRule {
        name: "catalog",
        resource: "catalog",
        arity: Arity::Exactly(1),
        literals: &[],
        children_only: false,
        build: catalog,
    },
    RouteRule {
        name: "datasets",
        resource: "catalog",
        arity: Arity::Exactly(2),
        literals: &[(1, "datasets")],
        children_only: true,
        build: catalog,
    },
    RouteRule {
        name: "dataset",
        resource: "catalog",
        arity: Arity::Exactly(3),
        literals: &[(1, "dataset")],
        children_only: false,
        build: dataset,
    },
    RouteRule {
        name: "distributions",
        resource: "catalog",
        arity: Arity::Exactly(4),
        literals: &[(1, "dataset"), (3, "distributions")],
        children_only: true,
        build: dataset,
    },
    RouteRule {
        name: "distribution",
        resource: "catalog",
        arity: Arity::AtLeast(5),
        literals: &[(1, "dataset"), (3, "distribution")],
        children_only: false,
        build: distribution,
    },
];

fn matching_rules<'a>(
    resource: &'a str,
    segments: &'a [String],
) -> impl Iterator<Item = &'static RouteRule> + 'a {
    RULES
        .iter()
        .filter(move |rule| rule.matches(resource, segments))
}

/// Match a resource name and its segments against the route table.
pub fn match_route(resource: &str, segments: &[String]) -> Result<Route, MalformedPath> {
    let rule = matching_rules(resource, segments)
        .next()
        .ok_or_else(|| MalformedPath {
            path: std::iter::once(resource)
                .chain(segments.iter().map(String::as_str))
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("/"),
        })?;

    tracing::debug!("Matched route '{}'", rule.name);
    Ok(Route {
        resource: (rule.build)(segments),
        children_only: rule.children_only,
    })
}
