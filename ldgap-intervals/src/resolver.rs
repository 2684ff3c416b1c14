//! Resolver
//!
//! Turns candidates into definitions and merges them into the output graph.
//!
//! # Per-candidate workflow
//! 1. Fetch the Turtle description from the candidate IRI
//! 2. Parse it, resolving relative IRIs against the candidate IRI
//! 3. Project the kept statements
//! 4. Derive the label
//!
//! # Error Handling
//! - Fetch and parse failures skip the candidate, never the batch
//! - Each failure is logged with the graphs that reference the candidate
//! - Nothing is merged for a failed candidate
//!
//! Candidates are resolved one at a time by default. A wider window overlaps
//! fetches, but definitions are still merged in candidate order by a single
//! consumer, so the output does not depend on the window.

use crate::error::{CandidateFailure, FailureReason};
use crate::fetch::{DescriptionFetcher, TURTLE};
use crate::label::derive_label;
use crate::model::{Candidate, CandidateDefinition, CandidateSet, OutputGraph};
use crate::projector::project;
use futures::stream::{self, StreamExt};
use ldgap_common::rdf::parse_turtle;
use oxrdf::NamedNode;
use std::pin::pin;
use tracing::{debug, info, warn};

/// Result of resolving a candidate set
#[derive(Debug, Clone, Default)]
pub struct ResolveOutcome {
    /// Definitions of every resolved candidate
    pub graph: OutputGraph,
    /// Number of candidates merged into the graph
    pub resolved: usize,
    /// Candidates that were skipped, in candidate order
    pub failures: Vec<CandidateFailure>,
}

/// Resolves candidates through a [`DescriptionFetcher`]
pub struct Resolver<F> {
    fetcher: F,
    max_in_flight: usize,
}

impl<F: DescriptionFetcher> Resolver<F> {
    /// Sequential resolver
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            max_in_flight: 1,
        }
    }

    /// Allow up to `max_in_flight` fetches at once (minimum 1)
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Build the definition for a single candidate
    pub async fn define(&self, iri: &str) -> Result<CandidateDefinition, FailureReason> {
        let payload = self.fetcher.fetch(iri, TURTLE).await?;

        let description =
            parse_turtle(&payload, iri).map_err(|e| FailureReason::Parse(e.to_string()))?;
        let subject =
            NamedNode::new(iri).map_err(|e| FailureReason::Parse(format!("invalid IRI: {}", e)))?;

        debug!(
            iri = %iri,
            statements = description.len(),
            "Parsed description"
        );

        let statements = project(subject.as_ref(), &description);
        let label = derive_label(subject.as_ref(), &description);

        Ok(CandidateDefinition {
            subject,
            statements,
            label,
        })
    }

    /// Resolve every candidate and accumulate the output graph
    pub async fn resolve(&self, candidates: &CandidateSet) -> ResolveOutcome {
        info!(
            candidates = candidates.len(),
            max_in_flight = self.max_in_flight,
            "Resolving candidates"
        );

        let mut outcome = ResolveOutcome::default();

        let mut definitions = pin!(stream::iter(candidates.iter())
            .map(|candidate| async move {
                let result = self.define(&candidate.iri).await;
                (candidate, result)
            })
            .buffered(self.max_in_flight));

        while let Some((candidate, result)) = definitions.next().await {
            match result {
                Ok(definition) => {
                    let added = outcome.graph.merge(definition);
                    outcome.resolved += 1;
                    debug!(iri = %candidate.iri, added, "Merged definition");
                }
                Err(reason) => {
                    report_failure(&candidate, &reason);
                    outcome.failures.push(CandidateFailure {
                        iri: candidate.iri,
                        origins: candidate.origins,
                        reason,
                    });
                }
            }
        }

        info!(
            resolved = outcome.resolved,
            failed = outcome.failures.len(),
            statements = outcome.graph.len(),
            "Resolution complete"
        );

        outcome
    }
}

fn report_failure(candidate: &Candidate, reason: &FailureReason) {
    match reason {
        FailureReason::Fetch(error) => match error.status() {
            Some(status) => warn!(iri = %candidate.iri, status, "Error {} for <{}>", status, candidate.iri),
            None => warn!(iri = %candidate.iri, error = %error, "Error fetching <{}>", candidate.iri),
        },
        FailureReason::Parse(error) => {
            warn!(iri = %candidate.iri, error = %error, "Error parsing <{}>", candidate.iri)
        }
    }

    for origin in &candidate.origins {
        warn!(iri = %candidate.iri, origin = %origin, " - <{}>", origin);
    }
}
