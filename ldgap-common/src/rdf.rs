//! Turtle parsing and serialization
//!
//! Thin wrapper over `oxttl` so callers deal in `oxrdf::Graph` values and
//! the crate error type only.

use crate::{Error, Result};
use oxrdf::{Graph, TermRef, TripleRef};
use oxttl::{TurtleParser, TurtleSerializer};
use std::io::Write;

/// Parse a Turtle document into a graph
///
/// Relative IRIs in the payload resolve against `base_iri`, which is
/// normally the IRI the document was dereferenced from.
pub fn parse_turtle(payload: &str, base_iri: &str) -> Result<Graph> {
    let parser = TurtleParser::new()
        .with_base_iri(base_iri)
        .map_err(|e| Error::RdfParse(format!("invalid base IRI <{}>: {}", base_iri, e)))?;

    let mut graph = Graph::new();
    for triple in parser.for_slice(payload.as_bytes()) {
        let triple = triple.map_err(|e| Error::RdfParse(e.to_string()))?;
        graph.insert(&triple);
    }

    Ok(graph)
}

/// Serialize a graph as Turtle into `writer`
///
/// Triples are written sorted by subject, predicate and object so that
/// repeated runs over the same data produce the same file.
pub fn write_turtle<W: Write>(graph: &Graph, prefixes: &[(&str, &str)], writer: W) -> Result<W> {
    let mut serializer = TurtleSerializer::new();
    for (name, iri) in prefixes {
        serializer = serializer
            .with_prefix(*name, *iri)
            .map_err(|e| Error::RdfSerialize(format!("invalid prefix {}: <{}>: {}", name, iri, e)))?;
    }

    let mut triples: Vec<TripleRef<'_>> = graph.iter().collect();
    triples.sort_by_cached_key(|t| {
        (
            t.subject.to_string(),
            t.predicate.as_str().to_string(),
            t.object.to_string(),
        )
    });

    let mut writer = serializer.for_writer(writer);
    for triple in triples {
        writer
            .serialize_triple(triple)
            .map_err(|e| Error::RdfSerialize(e.to_string()))?;
    }

    writer.finish().map_err(|e| Error::RdfSerialize(e.to_string()))
}

/// Serialize a graph as Turtle into a byte buffer
pub fn to_turtle(graph: &Graph, prefixes: &[(&str, &str)]) -> Result<Vec<u8>> {
    write_turtle(graph, prefixes, Vec::new())
}

/// Textual form of a term: IRI, blank node id or literal lexical value
pub fn term_text(term: TermRef<'_>) -> &str {
    match term {
        TermRef::NamedNode(node) => node.as_str(),
        TermRef::BlankNode(node) => node.as_str(),
        TermRef::Literal(literal) => literal.value(),
        #[allow(unreachable_patterns)]
        _ => "",
    }
}
