//! On-disk description cache
//!
//! Successful fetches are stored under the cache directory as two files
//! named by the SHA-256 of `"{accept} {uri}"`:
//! - `{key}.body` holds the payload
//! - `{key}.json` records the URI, media type and fetch time
//!
//! Entries younger than the freshness lifetime are served without touching
//! the network. Failures are never cached, and a cache that cannot be read
//! or written only costs a refetch.

use super::{DescriptionFetcher, FetchError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Sidecar metadata for a cached payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct CacheEntry {
    uri: String,
    accept: String,
    fetched_at: DateTime<Utc>,
}

/// Fetcher that consults a disk cache before delegating
pub struct CachingFetcher<F> {
    inner: F,
    dir: PathBuf,
    ttl: Duration,
}

impl<F: DescriptionFetcher> CachingFetcher<F> {
    pub fn new(inner: F, dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            inner,
            dir: dir.into(),
            ttl,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache key for a request
    pub fn cache_key(uri: &str, accept: &str) -> String {
        let hash = Sha256::digest(format!("{} {}", accept, uri).as_bytes());
        format!("{:x}", hash)
    }

    fn paths(&self, key: &str) -> (PathBuf, PathBuf) {
        (
            self.dir.join(format!("{}.body", key)),
            self.dir.join(format!("{}.json", key)),
        )
    }

    /// Fresh cached payload, if any
    async fn lookup(&self, uri: &str, accept: &str) -> Option<String> {
        let key = Self::cache_key(uri, accept);
        let (body_path, meta_path) = self.paths(&key);

        let meta = tokio::fs::read(&meta_path).await.ok()?;
        let entry: CacheEntry = match serde_json::from_slice(&meta) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %meta_path.display(), error = %e, "Ignoring unreadable cache entry");
                return None;
            }
        };

        if entry.uri != uri || entry.accept != accept {
            return None;
        }

        let age = Utc::now().signed_duration_since(entry.fetched_at);
        let fresh = age
            .to_std()
            .map(|age| age < self.ttl)
            .unwrap_or(false);
        if !fresh {
            debug!(uri = %uri, age_secs = age.num_seconds(), "Cache entry stale");
            return None;
        }

        match tokio::fs::read_to_string(&body_path).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(path = %body_path.display(), error = %e, "Cached body missing");
                None
            }
        }
    }

    async fn store(&self, uri: &str, accept: &str, body: &str) -> std::io::Result<()> {
        let key = Self::cache_key(uri, accept);
        let (body_path, meta_path) = self.paths(&key);

        let entry = CacheEntry {
            uri: uri.to_string(),
            accept: accept.to_string(),
            fetched_at: Utc::now(),
        };
        let meta = serde_json::to_vec_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        tokio::fs::create_dir_all(&self.dir).await?;
        // Body first: metadata without a body reads as a miss
        tokio::fs::write(&body_path, body).await?;
        tokio::fs::write(&meta_path, meta).await?;
        Ok(())
    }
}

#[async_trait]
impl<F: DescriptionFetcher> DescriptionFetcher for CachingFetcher<F> {
    async fn fetch(&self, uri: &str, accept: &str) -> Result<String, FetchError> {
        if let Some(body) = self.lookup(uri, accept).await {
            debug!(uri = %uri, "Serving description from cache");
            return Ok(body);
        }

        let body = self.inner.fetch(uri, accept).await?;

        if let Err(e) = self.store(uri, accept, &body).await {
            warn!(uri = %uri, dir = %self.dir.display(), error = %e, "Failed to cache description");
        }

        Ok(body)
    }
}
