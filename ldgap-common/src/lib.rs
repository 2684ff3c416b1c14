//! # ldgap Common Library
//!
//! Shared code for the ldgap gap-filling tools:
//! - Error type
//! - Configuration loading and endpoint resolution
//! - Turtle parsing and serialization

pub mod config;
pub mod error;
pub mod rdf;

pub use error::{Error, Result};
