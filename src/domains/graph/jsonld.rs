//! Expanded JSON-LD rendering.

use serde_json::{Map, Value, json};

use super::model::{GraphDocument, Literal, Node, Term};

/// Render a document as an expanded JSON-LD array of node objects.
pub fn to_json_ld(document: &GraphDocument) -> Value {
    Value::Array(document.nodes().iter().map(node_object).collect())
}

fn node_object(node: &Node) -> Value {
    let mut object = Map::new();
    object.insert("@id".to_string(), json!(node.id));
    if !node.types.is_empty() {
        object.insert("@type".to_string(), json!(node.types));
    }

    for (predicate, term) in &node.properties {
        let values = object
            .entry(predicate.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(values) = values {
            match term {
                Term::Iri(iri) => values.push(json!({ "@id": iri })),
                Term::Literal(literal) => values.push(literal_object(literal)),
                Term::Node(nested) => values.push(node_object(nested)),
                Term::IriList(iris) => {
                    values.extend(iris.iter().map(|iri| json!({ "@id": iri })));
                }
            }
        }
    }

    Value::Object(object)
}

fn literal_object(literal: &Literal) -> Value {
    let mut object = Map::new();
    object.insert("@value".to_string(), json!(literal.value));
    if let Some(language) = &literal.language {
        object.insert("@language".to_string(), json!(language));
    } else if let Some(datatype) = &literal.datatype {
        object.insert("@type".to_string(), json!(datatype));
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_rendering() {
        let doc = GraphDocument::new(vec![
            Node::new("https://example.org/a", ["https://example.org/T"])
                .with("https://example.org/title", Literal::english("Hello"))
                .with("https://example.org/link", Term::iri("https://example.org/b"))
                .with(
                    "https://example.org/members",
                    Term::IriList(vec![
                        "https://example.org/c".to_string(),
                        "https://example.org/d".to_string(),
                    ]),
                )
                .with(
                    "https://example.org/agent",
                    Node::new("https://example.org/e", ["https://example.org/Agent"])
                        .with("https://example.org/name", Literal::plain("E")),
                ),
        ]);

        let rendered = to_json_ld(&doc);
        assert_eq!(
            rendered,
            json!([{
                "@id": "https://example.org/a",
                "@type": ["https://example.org/T"],
                "https://example.org/title": [{"@value": "Hello", "@language": "en"}],
                "https://example.org/link": [{"@id": "https://example.org/b"}],
                "https://example.org/members": [
                    {"@id": "https://example.org/c"},
                    {"@id": "https://example.org/d"}
                ],
                "https://example.org/agent": [{
                    "@id": "https://example.org/e",
                    "@type": ["https://example.org/Agent"],
                    "https://example.org/name": [{"@value": "E"}]
                }]
            }])
        );
    }

    #[test]
    fn test_repeated_predicates_are_merged() {
        let doc = GraphDocument::new(vec![
            Node::new("https://example.org/a", ["https://example.org/T"])
                .with("https://example.org/p", Literal::plain("1"))
                .with("https://example.org/p", Literal::plain("2")),
        ]);

        let rendered = to_json_ld(&doc);
        assert_eq!(rendered[0]["https://example.org/p"].as_array().unwrap().len(), 2);
    }
}
