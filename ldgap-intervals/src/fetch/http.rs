//! HTTP description fetcher
//!
//! Dereferences resource IRIs with `Accept` content negotiation. Redirects
//! are followed (reference.data.gov.uk answers 303 See Other for `/id/`
//! IRIs).

use super::{DescriptionFetcher, FetchError};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("ldgap/", env!("CARGO_PKG_VERSION"));

/// Default timeout for a single request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches descriptions over HTTP
#[derive(Clone)]
pub struct HttpFetcher {
    http_client: Client,
}

impl HttpFetcher {
    /// Create fetcher with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Reuse an existing client (shares its connection pool)
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl DescriptionFetcher for HttpFetcher {
    async fn fetch(&self, uri: &str, accept: &str) -> Result<String, FetchError> {
        debug!(uri = %uri, accept = %accept, "Fetching description");

        let response = self
            .http_client
            .get(uri)
            .header(header::ACCEPT, accept)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        debug!(uri = %uri, bytes = body.len(), "Fetched description");

        Ok(body)
    }
}
