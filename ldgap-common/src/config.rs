//! Configuration loading and SPARQL endpoint resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming the SPARQL endpoint
pub const SPARQL_URL_ENV: &str = "SPARQL_URL";

/// Compiled default endpoint
pub const DEFAULT_SPARQL_URL: &str = "http://staging.gss-data.org.uk/sparql";

/// Production endpoint; deployed pipelines still point here although the
/// reference graphs live on staging, so it is rewritten after resolution.
pub const PRODUCTION_SPARQL_URL: &str = "http://gss-data.org.uk/sparql";

/// Default freshness lifetime for cached descriptions
pub const DEFAULT_CACHE_TTL_HOURS: u64 = 24;

/// Optional settings read from `config.toml`
///
/// Every key is optional; a missing file is equivalent to an empty one.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TomlConfig {
    /// SPARQL endpoint (overridden by CLI and `SPARQL_URL`)
    pub sparql_url: Option<String>,
    /// Output Turtle file
    pub output: Option<PathBuf>,
    /// Directory for the description cache (enables caching)
    pub cache_dir: Option<PathBuf>,
    /// Cache freshness lifetime in hours
    pub cache_ttl_hours: Option<u64>,
}

/// Load the TOML config file
///
/// With an explicit path the file must be readable. Without one the
/// platform config location is tried and silently skipped if absent.
/// A file that does not parse is reported and replaced by defaults.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No config file found, using defaults");
                return Ok(TomlConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|e| {
        Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
    })?;

    Ok(parse_toml_config(&content, &path))
}

/// Parse config text, falling back to defaults on malformed input
pub fn parse_toml_config(content: &str, origin: &Path) -> TomlConfig {
    match toml::from_str::<TomlConfig>(content) {
        Ok(config) => {
            debug!(path = %origin.display(), "Loaded config file");
            config
        }
        Err(e) => {
            warn!(
                path = %origin.display(),
                error = %e,
                "Malformed config file ignored, using defaults"
            );
            TomlConfig::default()
        }
    }
}

/// Platform location of `config.toml` (`~/.config/ldgap/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ldgap").join("config.toml"))
}

/// Platform location of the description cache
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("ldgap"))
        .unwrap_or_else(|| PathBuf::from(".cache/ldgap"))
}

/// SPARQL endpoint resolution, highest priority first:
/// 1. Command-line argument
/// 2. `SPARQL_URL` environment variable
/// 3. `sparql_url` from the TOML config
/// 4. Compiled default
///
/// The production endpoint is then rewritten to staging.
pub fn resolve_sparql_url(cli_arg: Option<&str>, toml: &TomlConfig) -> String {
    let url = if let Some(url) = cli_arg {
        url.to_string()
    } else if let Ok(url) = std::env::var(SPARQL_URL_ENV) {
        url
    } else if let Some(url) = &toml.sparql_url {
        url.clone()
    } else {
        DEFAULT_SPARQL_URL.to_string()
    };

    rewrite_production_endpoint(url)
}

/// Point the production endpoint at staging; other URLs pass through
pub fn rewrite_production_endpoint(url: String) -> String {
    if url == PRODUCTION_SPARQL_URL {
        warn!(
            from = PRODUCTION_SPARQL_URL,
            to = DEFAULT_SPARQL_URL,
            "Rewriting production SPARQL endpoint to staging"
        );
        DEFAULT_SPARQL_URL.to_string()
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_production_endpoint() {
        assert_eq!(
            rewrite_production_endpoint(PRODUCTION_SPARQL_URL.to_string()),
            DEFAULT_SPARQL_URL
        );
        assert_eq!(
            rewrite_production_endpoint("http://example.org/sparql".to_string()),
            "http://example.org/sparql"
        );
    }

    #[test]
    fn test_parse_toml_config_all_keys() {
        let config = parse_toml_config(
            r#"
sparql_url = "http://example.org/sparql"
output = "out.ttl"
cache_dir = "/tmp/ldgap-cache"
cache_ttl_hours = 6
"#,
            Path::new("config.toml"),
        );

        assert_eq!(config.sparql_url.as_deref(), Some("http://example.org/sparql"));
        assert_eq!(config.output, Some(PathBuf::from("out.ttl")));
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/ldgap-cache")));
        assert_eq!(config.cache_ttl_hours, Some(6));
    }

    #[test]
    fn test_parse_toml_config_malformed_falls_back() {
        let config = parse_toml_config("sparql_url = [1, 2", Path::new("broken.toml"));
        assert_eq!(config, TomlConfig::default());
    }
}
