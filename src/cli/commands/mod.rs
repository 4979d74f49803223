//! CLI command implementations.

pub mod films;
pub mod serve;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::cache::MokaCacheStore;
use crate::adapters::catalog::GhibliClient;
use crate::domain::models::Config;
use crate::domain::ports::{CacheStore, CatalogClient};
use crate::services::MovieService;

/// Wire the shared store, catalog client and response cache gate.
pub(crate) fn build_movie_service(config: &Config) -> Result<Arc<MovieService>> {
    let cache: Arc<dyn CacheStore> = Arc::new(MokaCacheStore::from_config(&config.cache));
    let catalog: Arc<dyn CatalogClient> = Arc::new(
        GhibliClient::from_config(&config.catalog, cache.clone())
            .context("Failed to create catalog client")?,
    );
    Ok(Arc::new(MovieService::new(catalog, cache)))
}
