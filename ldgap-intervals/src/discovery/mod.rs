//! Candidate Discovery
//!
//! Finds period values used in datasets that the catalogue cannot describe,
//! grouped by the dataset graphs that use them.
//!
//! # Error Handling
//! - Endpoint failure (transport, non-success status, undecodable body) is
//!   fatal: there is nothing to resolve without a candidate set
//! - Individual bindings that are not IRIs are reported and skipped

pub mod bindings;
pub mod queries;
pub mod sparql_client;

pub use bindings::{candidates_from_results, BindingValue, SparqlResults};
pub use sparql_client::{DiscoveryError, SparqlClient};

use crate::model::CandidateSet;
use clap::ValueEnum;
use std::path::PathBuf;
use tracing::info;

/// Which gap the run is closing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiscoveryVariant {
    /// Period values with no interval definition in the reference graph
    Intervals,
    /// Period values with no label anywhere
    Labels,
}

impl DiscoveryVariant {
    /// SPARQL query selecting `?dsgraph ?o`
    pub fn query(self) -> &'static str {
        match self {
            DiscoveryVariant::Intervals => queries::MISSING_INTERVALS,
            DiscoveryVariant::Labels => queries::MISSING_LABELS,
        }
    }

    /// Output file written when none is configured
    pub fn default_output(self) -> PathBuf {
        match self {
            DiscoveryVariant::Intervals => PathBuf::from("missing-intervals.ttl"),
            DiscoveryVariant::Labels => PathBuf::from("missing-periods.ttl"),
        }
    }

    fn description(self) -> &'static str {
        match self {
            DiscoveryVariant::Intervals => "reference periods",
            DiscoveryVariant::Labels => "period labels",
        }
    }
}

/// Query the endpoint and build the candidate set
pub async fn discover(
    client: &SparqlClient,
    variant: DiscoveryVariant,
) -> Result<CandidateSet, DiscoveryError> {
    info!(
        "Looking for missing {} at {}.",
        variant.description(),
        client.endpoint()
    );

    let results = client.select(variant.query()).await?;
    let candidates = candidates_from_results(&results);

    info!(
        candidates = candidates.len(),
        bindings = results.len(),
        "Discovery complete"
    );

    Ok(candidates)
}
