//! Error types for ldgap-intervals
//!
//! Only discovery and output failures end a run. Per-candidate failures are
//! collected as [`CandidateFailure`] values and reported.

use crate::discovery::DiscoveryError;
use crate::fetch::FetchError;
use std::collections::BTreeSet;
use thiserror::Error;

/// Why a candidate could not be resolved
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FailureReason {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("unparseable description: {0}")]
    Parse(String),
}

/// A skipped candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFailure {
    pub iri: String,
    /// Graphs that reference the candidate
    pub origins: BTreeSet<String>,
    pub reason: FailureReason,
}

/// Fatal pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Cannot create HTTP client: {0}")]
    Client(#[from] FetchError),

    #[error("Cannot write output: {0}")]
    Output(#[from] ldgap_common::Error),
}

/// Result type for pipeline runs
pub type PipelineResult<T> = Result<T, PipelineError>;
