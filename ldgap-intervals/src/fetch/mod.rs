//! Description fetching
//!
//! [`DescriptionFetcher`] is the seam between the resolver and the network.
//! [`HttpFetcher`] dereferences IRIs with content negotiation;
//! [`CachingFetcher`] wraps any fetcher with an on-disk cache.

pub mod cache;
pub mod http;

pub use cache::CachingFetcher;
pub use http::HttpFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Media type requested for descriptions
pub const TURTLE: &str = "text/turtle";

/// Fetch failures; all of them are final for the candidate
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Response body could not be read as text
    #[error("Unreadable response body: {0}")]
    Body(String),
}

impl FetchError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Retrieves the textual representation of a resource
///
/// # Example
/// ```rust,ignore
/// let fetcher = HttpFetcher::new()?;
/// let turtle = fetcher.fetch("http://reference.data.gov.uk/id/year/2020", TURTLE).await?;
/// ```
#[async_trait]
pub trait DescriptionFetcher: Send + Sync {
    /// Fetch `uri`, asking for the `accept` media type
    async fn fetch(&self, uri: &str, accept: &str) -> Result<String, FetchError>;
}
