//! SPARQL JSON result bindings and their conversion to candidates

use crate::model::CandidateSet;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Variable holding the period value
pub const VALUE_VAR: &str = "o";

/// Variable holding the graph the value was found in
pub const ORIGIN_VAR: &str = "dsgraph";

/// `application/sparql-results+json` document (SELECT form)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub results: ResultSet,
}

/// Bindings are kept as raw JSON so one malformed row cannot fail the
/// whole document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub bindings: Vec<Value>,
}

/// One bound RDF term
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BindingValue {
    /// `uri`, `literal`, `typed-literal` or `bnode`
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl BindingValue {
    pub fn is_uri(&self) -> bool {
        self.kind == "uri"
    }

    /// Term bound to `var` in `binding`, if it is a well-formed term
    pub fn from_binding(binding: &Value, var: &str) -> Option<Self> {
        let term = binding.get(var)?;
        serde_json::from_value(term.clone()).ok()
    }
}

impl SparqlResults {
    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }
}

/// Collect candidate IRIs with the graphs that use them
///
/// Bindings whose value is missing, malformed or not an IRI are reported
/// and dropped.
pub fn candidates_from_results(results: &SparqlResults) -> CandidateSet {
    let mut candidates = CandidateSet::new();

    for binding in &results.results.bindings {
        let value = match BindingValue::from_binding(binding, VALUE_VAR) {
            Some(value) if value.is_uri() => value,
            _ => {
                warn!(
                    binding = %binding,
                    "Warning, value of dimension is not a resource"
                );
                continue;
            }
        };

        let origin = BindingValue::from_binding(binding, ORIGIN_VAR).map(|g| g.value);
        candidates.insert(value.value, origin);
    }

    candidates
}
