//! Pipeline Driver
//!
//! Discovery → resolution → output file.
//!
//! # Example
//! ```rust,ignore
//! let config = PipelineConfig::new("http://staging.gss-data.org.uk/sparql", DiscoveryVariant::Intervals);
//! let summary = pipeline::run(&config).await?;
//! println!("{} of {} candidates resolved", summary.resolved, summary.candidates);
//! ```

use crate::discovery::{discover, DiscoveryVariant, SparqlClient};
use crate::error::{CandidateFailure, PipelineResult};
use crate::fetch::{CachingFetcher, DescriptionFetcher, HttpFetcher};
use crate::model::CandidateSet;
use crate::output::write_output;
use crate::resolver::{ResolveOutcome, Resolver};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Disk cache settings for description fetches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    pub dir: PathBuf,
    pub ttl: Duration,
}

impl CacheSettings {
    /// Cache in `dir` with a lifetime given in hours
    pub fn with_ttl_hours(dir: PathBuf, hours: u64) -> Self {
        Self {
            dir,
            ttl: Duration::from_secs(hours.saturating_mul(3600)),
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// SPARQL endpoint used for discovery
    pub sparql_url: String,
    /// Which gap to close
    pub variant: DiscoveryVariant,
    /// Output Turtle file
    pub output: PathBuf,
    /// Description cache; `None` fetches everything from the network
    pub cache: Option<CacheSettings>,
    /// Fetches allowed in flight at once
    pub max_in_flight: usize,
}

impl PipelineConfig {
    /// Sequential, uncached run writing the variant's default file
    pub fn new(sparql_url: impl Into<String>, variant: DiscoveryVariant) -> Self {
        Self {
            sparql_url: sparql_url.into(),
            variant,
            output: variant.default_output(),
            cache: None,
            max_in_flight: 1,
        }
    }
}

/// What a completed run did
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub candidates: usize,
    pub resolved: usize,
    pub failures: Vec<CandidateFailure>,
    pub statements: usize,
    pub output: PathBuf,
}

/// Run discovery, resolution and output
pub async fn run(config: &PipelineConfig) -> PipelineResult<RunSummary> {
    let client = SparqlClient::new(config.sparql_url.as_str())?;
    let candidates = discover(&client, config.variant).await?;

    let fetcher = HttpFetcher::new()?;
    let outcome = match &config.cache {
        Some(cache) => {
            info!(
                dir = %cache.dir.display(),
                ttl_secs = cache.ttl.as_secs(),
                "Description cache enabled"
            );
            let fetcher = CachingFetcher::new(fetcher, cache.dir.clone(), cache.ttl);
            resolve_candidates(fetcher, &candidates, config.max_in_flight).await
        }
        None => resolve_candidates(fetcher, &candidates, config.max_in_flight).await,
    };

    write_output(&outcome.graph, &config.output).await?;

    Ok(RunSummary {
        candidates: candidates.len(),
        resolved: outcome.resolved,
        statements: outcome.graph.len(),
        failures: outcome.failures,
        output: config.output.clone(),
    })
}

/// Resolve a candidate set with the given fetcher
pub async fn resolve_candidates<F: DescriptionFetcher>(
    fetcher: F,
    candidates: &CandidateSet,
    max_in_flight: usize,
) -> ResolveOutcome {
    Resolver::new(fetcher)
        .with_max_in_flight(max_in_flight)
        .resolve(candidates)
        .await
}
