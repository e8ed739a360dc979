//! Output format negotiation.

use crate::domains::graph::{GraphDocument, to_json_ld, to_turtle};

/// The serialisations a document can be returned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    JsonLd,
    Turtle,
}

impl OutputFormat {
    /// Match a single media type, ignoring parameters and case.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            // A `+` that reached us unencoded in a query string decodes to a space.
            "application/ld+json" | "application/ld json" | "application/json" => {
                Some(Self::JsonLd)
            }
            "text/turtle" => Some(Self::Turtle),
            _ => None,
        }
    }

    /// Pick a format: an explicit `?format=` wins, then the first supported
    /// entry of `Accept`, then JSON-LD.
    pub fn negotiate(format_param: Option<&str>, accept: Option<&str>) -> Self {
        if let Some(format) = format_param.and_then(Self::from_media_type) {
            return format;
        }

        accept
            .into_iter()
            .flat_map(|accept| accept.split(','))
            .find_map(Self::from_media_type)
            .unwrap_or_default()
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::JsonLd => "application/ld+json; charset=UTF-8",
            Self::Turtle => "text/turtle; charset=UTF-8",
        }
    }

    pub fn render(self, document: &GraphDocument) -> Result<String, serde_json::Error> {
        match self {
            Self::JsonLd => serde_json::to_string_pretty(&to_json_ld(document)),
            Self::Turtle => Ok(to_turtle(document)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::graph::Node;

    #[test]
    fn test_format_param_wins() {
        assert_eq!(
            OutputFormat::negotiate(Some("text/turtle"), Some("application/ld+json")),
            OutputFormat::Turtle
        );
        assert_eq!(
            OutputFormat::negotiate(Some("application/ld json"), Some("text/turtle")),
            OutputFormat::JsonLd
        );
    }

    #[test]
    fn test_unknown_param_falls_back_to_accept() {
        assert_eq!(
            OutputFormat::negotiate(Some("text/csv"), Some("text/html, text/turtle;q=0.9")),
            OutputFormat::Turtle
        );
    }

    #[test]
    fn test_default_is_json_ld() {
        assert_eq!(OutputFormat::negotiate(None, None), OutputFormat::JsonLd);
        assert_eq!(
            OutputFormat::negotiate(None, Some("*/*")),
            OutputFormat::JsonLd
        );
    }

    #[test]
    fn test_render() {
        let document = GraphDocument::new(vec![Node::new(
            "https://fdp.example.org/",
            ["https://w3id.org/fdp/fdp-o#FAIRDataPoint"],
        )]);

        let json = OutputFormat::JsonLd.render(&document).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["@id"], "https://fdp.example.org/");

        let turtle = OutputFormat::Turtle.render(&document).unwrap();
        assert!(turtle.contains("<https://fdp.example.org/>"));
    }
}
