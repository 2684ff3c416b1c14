//! Candidate and output graph types
//!
//! A [`CandidateSet`] flows in from discovery, each candidate is turned into
//! a [`CandidateDefinition`], and definitions are merged one at a time into
//! the [`OutputGraph`].

use oxrdf::vocab::rdfs;
use oxrdf::{Graph, NamedNode, NamedNodeRef, Term, Triple, TripleRef};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

// ============================================================================
// Candidates
// ============================================================================

/// Resource suspected of lacking a definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Resource IRI
    pub iri: String,
    /// Graphs that reference the resource (diagnostics only)
    pub origins: BTreeSet<String>,
}

/// Candidates deduplicated by IRI
///
/// Iteration is ordered by IRI so that a run over the same discovery result
/// always visits candidates in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate, optionally with the graph it was found in
    ///
    /// Returns `true` if the IRI was not already a candidate.
    pub fn insert(&mut self, iri: impl Into<String>, origin: Option<String>) -> bool {
        let iri = iri.into();
        let is_new = !self.entries.contains_key(&iri);
        let origins = self.entries.entry(iri).or_default();
        if let Some(origin) = origin {
            origins.insert(origin);
        }
        is_new
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, iri: &str) -> bool {
        self.entries.contains_key(iri)
    }

    /// Origins recorded for a candidate
    pub fn origins(&self, iri: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(iri)
    }

    /// Candidates in IRI order
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.entries.iter().map(|(iri, origins)| Candidate {
            iri: iri.clone(),
            origins: origins.clone(),
        })
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        for iri in iter {
            set.insert(iri, None);
        }
        set
    }
}

// ============================================================================
// Definitions
// ============================================================================

/// Statements one resolved candidate contributes to the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDefinition {
    pub subject: NamedNode,
    /// Projected statements (types and allow-listed descriptive values)
    pub statements: Vec<Triple>,
    /// Canonical label, if one could be derived
    pub label: Option<Term>,
}

// ============================================================================
// Output graph
// ============================================================================

/// Accumulated definitions for every resolved candidate
///
/// Only grows. Holds at most one `rdfs:label` per subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputGraph {
    graph: Graph,
}

impl OutputGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one candidate's definition
    ///
    /// Returns the number of statements that were not already present.
    pub fn merge(&mut self, definition: CandidateDefinition) -> usize {
        let mut added = 0;
        for statement in &definition.statements {
            if self.graph.insert(statement) {
                added += 1;
            }
        }

        if let Some(label) = definition.label {
            let subject = definition.subject.as_ref();
            match self.label_of(subject) {
                Some(existing) if existing == label => {}
                Some(existing) => {
                    warn!(
                        subject = %subject,
                        existing = %existing,
                        rejected = %label,
                        "Subject already has a label, keeping the first"
                    );
                }
                None => {
                    let triple = TripleRef::new(subject, rdfs::LABEL, label.as_ref());
                    if self.graph.insert(triple) {
                        added += 1;
                    }
                }
            }
        }

        added
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn contains<'a>(&self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.graph.contains(triple)
    }

    /// Label stored for a subject
    pub fn label_of(&self, subject: NamedNodeRef<'_>) -> Option<Term> {
        self.graph
            .object_for_subject_predicate(subject, rdfs::LABEL)
            .map(|term| term.into_owned())
    }

    /// All statements with the given subject
    pub fn statements_for(&self, subject: NamedNodeRef<'_>) -> Vec<Triple> {
        self.graph
            .triples_for_subject(subject)
            .map(|t| t.into_owned())
            .collect()
    }

    pub fn as_graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::rdf;
    use oxrdf::Literal;

    fn subject() -> NamedNode {
        NamedNode::new_unchecked("http://reference.data.gov.uk/id/year/2020")
    }

    fn definition_with_label(label: &str) -> CandidateDefinition {
        let subject = subject();
        CandidateDefinition {
            statements: vec![Triple::new(
                subject.clone(),
                rdf::TYPE,
                NamedNode::new_unchecked("http://www.w3.org/2006/time#Interval"),
            )],
            subject,
            label: Some(Literal::new_simple_literal(label).into()),
        }
    }

    #[test]
    fn test_candidate_set_collapses_origins() {
        let mut set = CandidateSet::new();
        assert!(set.insert("http://example.org/a", Some("http://example.org/g1".into())));
        assert!(!set.insert("http://example.org/a", Some("http://example.org/g2".into())));
        assert!(!set.insert("http://example.org/a", Some("http://example.org/g1".into())));

        assert_eq!(set.len(), 1);
        let origins = set.origins("http://example.org/a").unwrap();
        assert_eq!(origins.len(), 2);
    }

    #[test]
    fn test_candidate_set_iterates_in_iri_order() {
        let set: CandidateSet = ["http://example.org/b", "http://example.org/a"]
            .into_iter()
            .collect();

        let iris: Vec<String> = set.iter().map(|c| c.iri).collect();
        assert_eq!(iris, vec!["http://example.org/a", "http://example.org/b"]);
    }

    #[test]
    fn test_merge_keeps_first_label() {
        let mut graph = OutputGraph::new();
        graph.merge(definition_with_label("2020"));
        graph.merge(definition_with_label("Twenty twenty"));

        assert_eq!(
            graph.label_of(subject().as_ref()),
            Some(Literal::new_simple_literal("2020").into())
        );
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut graph = OutputGraph::new();
        assert_eq!(graph.merge(definition_with_label("2020")), 2);
        assert_eq!(graph.merge(definition_with_label("2020")), 0);
        assert_eq!(graph.len(), 2);
    }
}
