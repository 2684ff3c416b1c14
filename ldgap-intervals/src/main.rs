//! ldgap-intervals - reference period gap filler
//!
//! Finds period values used by datasets that lack a definition in the
//! reference graph, dereferences them and writes the synthesized
//! definitions as Turtle ready to load back into the catalogue.
//!
//! Per-candidate failures are logged and do not change the exit status;
//! a failed discovery query or an unwritable output file does.

use anyhow::{Context, Result};
use clap::Parser;
use ldgap_common::config::{
    default_cache_dir, load_toml_config, resolve_sparql_url, DEFAULT_CACHE_TTL_HOURS,
};
use ldgap_intervals::discovery::DiscoveryVariant;
use ldgap_intervals::pipeline::{self, CacheSettings, PipelineConfig};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for ldgap-intervals
#[derive(Parser, Debug)]
#[command(name = "ldgap-intervals")]
#[command(about = "Synthesize definitions for undefined reference periods")]
#[command(version)]
struct Args {
    /// Which gap to close
    #[arg(long, value_enum, default_value = "intervals")]
    variant: DiscoveryVariant,

    /// SPARQL endpoint (overrides SPARQL_URL and the config file)
    #[arg(long)]
    sparql_url: Option<String>,

    /// Config file (default: platform config dir, ldgap/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output Turtle file (default depends on --variant)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cache fetched descriptions in the platform cache directory
    #[arg(long)]
    cache: bool,

    /// Cache fetched descriptions in this directory
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Disable the description cache even if configured
    #[arg(long, conflicts_with_all = ["cache", "cache_dir"])]
    no_cache: bool,

    /// Hours a cached description stays fresh
    #[arg(long)]
    cache_ttl_hours: Option<u64>,

    /// Descriptions fetched concurrently (1 = strictly sequential)
    #[arg(long, default_value = "1")]
    max_in_flight: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ldgap_intervals=info,ldgap_common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting ldgap-intervals v{}", env!("CARGO_PKG_VERSION"));

    let toml = load_toml_config(args.config.as_deref()).context("Failed to load configuration")?;

    let sparql_url = resolve_sparql_url(args.sparql_url.as_deref(), &toml);
    info!("SPARQL endpoint: {}", sparql_url);
    let output = args
        .output
        .or(toml.output)
        .unwrap_or_else(|| args.variant.default_output());

    let cache_dir = if args.no_cache {
        None
    } else {
        args.cache_dir
            .or(toml.cache_dir)
            .or_else(|| args.cache.then(default_cache_dir))
    };
    let ttl_hours = args
        .cache_ttl_hours
        .or(toml.cache_ttl_hours)
        .unwrap_or(DEFAULT_CACHE_TTL_HOURS);
    let cache = cache_dir.map(|dir| CacheSettings::with_ttl_hours(dir, ttl_hours));

    let config = PipelineConfig {
        sparql_url,
        variant: args.variant,
        output,
        cache,
        max_in_flight: args.max_in_flight,
    };

    let summary = pipeline::run(&config)
        .await
        .with_context(|| format!("Run against {} failed", config.sparql_url))?;

    info!(
        "✓ Resolved {} of {} candidates, {} statements written to {}",
        summary.resolved,
        summary.candidates,
        summary.statements,
        summary.output.display()
    );
    if !summary.failures.is_empty() {
        warn!("{} candidates could not be resolved", summary.failures.len());
    }

    Ok(())
}
