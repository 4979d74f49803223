//! Response cache gate for the aggregated film list.
//!
//! The whole aggregate is cached as one unit under a single fixed key. A hit
//! is returned as stored, without touching the catalog. A miss runs the
//! fetch-and-combine pipeline and stores the result alongside its capture
//! time. Upstream changes stay invisible until the store evicts the entry
//! or [`MovieService::invalidate`] clears it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::domain::errors::DomainResult;
use crate::domain::ports::{CacheStore, CatalogClient};
use crate::domain::validation::is_truthy;
use crate::services::aggregator::Aggregator;

/// Cache key of the aggregate payload.
pub const MOVIES_CACHE_KEY: &str = "processed_movies_data";

/// Stored form of the aggregate: the payload plus when it was captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedMovies {
    pub data: Vec<Value>,
    pub timestamp: DateTime<Utc>,
}

/// Serves the aggregated film list through the shared cache.
pub struct MovieService {
    catalog: Arc<dyn CatalogClient>,
    aggregator: Aggregator,
    cache: Arc<dyn CacheStore>,
}

impl MovieService {
    pub fn new(catalog: Arc<dyn CatalogClient>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            aggregator: Aggregator::new(catalog.clone()),
            catalog,
            cache,
        }
    }

    /// The aggregated films, in catalog order, each with `actors` embedded.
    ///
    /// Nothing is cached when any step of the pipeline fails.
    #[instrument(skip(self))]
    pub async fn list_movies(&self) -> DomainResult<Vec<Value>> {
        if let Some(cached) = self.cached().await? {
            info!(count = cached.data.len(), captured_at = %cached.timestamp, "serving cached movies");
            return Ok(cached.data);
        }

        let films = self.catalog.fetch_films().await?;
        let combined = self.aggregator.combine(films).await?;
        let data = combined
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        let entry = CachedMovies {
            data,
            timestamp: Utc::now(),
        };
        self.cache
            .set(MOVIES_CACHE_KEY, serde_json::to_value(&entry)?)
            .await?;

        info!(count = entry.data.len(), "cached freshly aggregated movies");
        Ok(entry.data)
    }

    /// Drop the cached aggregate so the next call rebuilds it.
    pub async fn invalidate(&self) -> DomainResult<()> {
        self.cache.delete(MOVIES_CACHE_KEY).await?;
        info!("cleared cached movies");
        Ok(())
    }

    /// Empty the whole shared store, people lookups included.
    pub async fn invalidate_all(&self) -> DomainResult<()> {
        self.cache.clear().await?;
        info!("cleared entire cache store");
        Ok(())
    }

    /// The stored aggregate, if present, non-empty and well-formed.
    async fn cached(&self) -> DomainResult<Option<CachedMovies>> {
        let Some(raw) = self.cache.get(MOVIES_CACHE_KEY).await? else {
            return Ok(None);
        };
        if !is_truthy(&raw) {
            return Ok(None);
        }

        match serde_json::from_value::<CachedMovies>(raw) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!(error = %e, "ignoring malformed cached movies entry");
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for MovieService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieService").finish_non_exhaustive()
    }
}
