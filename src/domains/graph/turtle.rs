//! Turtle rendering.
//!
//! Nested nodes are referenced by IRI from their parent and written as their
//! own subject blocks after it.

use std::collections::VecDeque;
use std::fmt::Write;

use super::model::{GraphDocument, Literal, Node, Term};
use super::vocab::PREFIXES;

/// Render a document as Turtle.
pub fn to_turtle(document: &GraphDocument) -> String {
    let mut out = String::new();
    for (prefix, namespace) in PREFIXES {
        let _ = writeln!(out, "@prefix {}: <{}> .", prefix, namespace);
    }

    let mut queue: VecDeque<&Node> = document.nodes().iter().collect();
    while let Some(node) = queue.pop_front() {
        out.push('\n');
        write_node(&mut out, node, &mut queue);
    }

    out
}

fn write_node<'a>(out: &mut String, node: &'a Node, queue: &mut VecDeque<&'a Node>) {
    let mut statements = Vec::new();

    if !node.types.is_empty() {
        let types: Vec<_> = node.types.iter().map(|t| iri(t)).collect();
        statements.push(format!("a {}", types.join(", ")));
    }

    for (predicate, term) in &node.properties {
        let object = match term {
            Term::Iri(value) => iri(value),
            Term::Literal(value) => literal(value),
            Term::Node(nested) => {
                queue.push_back(nested);
                iri(&nested.id)
            }
            Term::IriList(values) if values.is_empty() => continue,
            Term::IriList(values) => values.iter().map(|v| iri(v)).collect::<Vec<_>>().join(", "),
        };
        statements.push(format!("{} {}", iri(predicate), object));
    }

    let _ = write!(out, "{}", iri(&node.id));
    if statements.is_empty() {
        out.push_str(" a <http://www.w3.org/2000/01/rdf-schema#Resource> .\n");
        return;
    }
    let _ = writeln!(out, "\n    {} .", statements.join(" ;\n    "));
}

/// Compact an IRI with a known prefix when the local name allows it.
fn iri(value: &str) -> String {
    for (prefix, namespace) in PREFIXES {
        if let Some(local) = value.strip_prefix(namespace) {
            if is_simple_local_name(local) {
                return format!("{}:{}", prefix, local);
            }
        }
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('<');
    for c in value.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | ' ' => {
                let _ = write!(escaped, "\\u{:04X}", c as u32);
            }
            c if (c as u32) < 0x20 => {
                let _ = write!(escaped, "\\u{:04X}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped.push('>');
    escaped
}

fn is_simple_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn literal(value: &Literal) -> String {
    let mut out = String::with_capacity(value.value.len() + 2);
    out.push('"');
    for c in value.value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');

    if let Some(language) = &value.language {
        out.push('@');
        out.push_str(language);
    } else if let Some(datatype) = &value.datatype {
        out.push_str("^^");
        out.push_str(&iri(datatype));
    }
    out
}
