//! Statement Projector
//!
//! Selects the statements of a fetched description that go into the
//! output graph:
//! - `rdf:type` values from the reference-data definition namespace
//! - both interval type markers, always
//! - the first value of each allow-listed descriptive predicate

use crate::vocab::{intervals, scovo, time, REFERENCE_DEF_NS};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, NamedNodeRef, TermRef, Triple, TripleRef};

/// Type markers every resolved interval carries
pub const INTERVAL_TYPES: [NamedNodeRef<'static>; 2] = [intervals::INTERVAL, time::INTERVAL];

/// Descriptive predicates copied from the description
pub const DESCRIPTIVE_PREDICATES: [NamedNodeRef<'static>; 5] = [
    scovo::MIN,
    scovo::MAX,
    time::HAS_BEGINNING,
    time::HAS_END,
    rdfs::COMMENT,
];

/// Project `description` onto the statements kept for `subject`
pub fn project(subject: NamedNodeRef<'_>, description: &Graph) -> Vec<Triple> {
    let mut statements = Vec::new();

    for object in description.objects_for_subject_predicate(subject, rdf::TYPE) {
        if let TermRef::NamedNode(class) = object {
            if class.as_str().starts_with(REFERENCE_DEF_NS) {
                statements.push(TripleRef::new(subject, rdf::TYPE, class).into_owned());
            }
        }
    }

    for class in INTERVAL_TYPES {
        let triple = TripleRef::new(subject, rdf::TYPE, class).into_owned();
        if !statements.contains(&triple) {
            statements.push(triple);
        }
    }

    for predicate in DESCRIPTIVE_PREDICATES {
        if let Some(value) = description.object_for_subject_predicate(subject, predicate) {
            statements.push(TripleRef::new(subject, predicate, value).into_owned());
        }
    }

    statements
}
