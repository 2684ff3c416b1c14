//! ldgap-intervals library interface
//!
//! Finds reference periods used as dataset dimension values that the
//! catalogue cannot describe, dereferences each one and synthesizes a
//! minimal interval definition (types, bounds, label) for loading back.

pub mod discovery;
pub mod error;
pub mod fetch;
pub mod label;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod projector;
pub mod resolver;
pub mod vocab;

pub use crate::error::{CandidateFailure, FailureReason, PipelineError, PipelineResult};
pub use crate::model::{Candidate, CandidateDefinition, CandidateSet, OutputGraph};
pub use crate::resolver::{ResolveOutcome, Resolver};
