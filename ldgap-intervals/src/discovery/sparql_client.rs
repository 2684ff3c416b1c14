//! SPARQL endpoint client
//!
//! Runs SELECT queries over the SPARQL 1.1 protocol (HTTP GET, `query`
//! parameter) and decodes JSON results.

use super::bindings::SparqlResults;
use crate::fetch::http::{DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::{header, Client};
use thiserror::Error;
use tracing::{debug, info};

/// Media type requested for query results
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Discovery query failures; all of them end the run
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("SPARQL endpoint unreachable: {0}")]
    Transport(String),

    #[error("SPARQL endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Cannot decode SPARQL results: {0}")]
    Decode(String),
}

/// Client for one SPARQL endpoint
#[derive(Clone)]
pub struct SparqlClient {
    http_client: Client,
    endpoint: String,
}

impl SparqlClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DiscoveryError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| DiscoveryError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a SELECT query
    pub async fn select(&self, query: &str) -> Result<SparqlResults, DiscoveryError> {
        debug!(endpoint = %self.endpoint, "Sending discovery query");

        let response = self
            .http_client
            .get(&self.endpoint)
            .header(header::ACCEPT, SPARQL_RESULTS_JSON)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| DiscoveryError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(DiscoveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let results: SparqlResults =
            serde_json::from_str(&body).map_err(|e| DiscoveryError::Decode(e.to_string()))?;

        info!("{} results found.", results.len());
        if results.is_empty() {
            debug!(body = %body, "Empty discovery response");
        }

        Ok(results)
    }
}
