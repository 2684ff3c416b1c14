//! Common error types for ldgap

use thiserror::Error;

/// Common result type for ldgap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across ldgap crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Turtle payload could not be parsed
    #[error("RDF parse error: {0}")]
    RdfParse(String),

    /// Graph could not be written as Turtle
    #[error("RDF serialize error: {0}")]
    RdfSerialize(String),
}
