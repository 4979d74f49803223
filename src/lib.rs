//! Ghibli Cast - Studio Ghibli film and cast aggregator
//!
//! Fetches the film list from the Ghibli catalog, resolves every film's
//! people references into actor records through concurrent lookups, and
//! serves the merged result through a shared-secret protected, cached
//! JSON endpoint.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - **Domain Layer** (`domain`): film/actor models, raw-record validation, errors, ports
//! - **Service Layer** (`services`): aggregation, response cache gate, access gate
//! - **Adapters** (`adapters`): moka cache store, reqwest catalog client, axum endpoint
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ghibli_cast::{GhibliClient, MokaCacheStore, MovieService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cache = Arc::new(MokaCacheStore::new());
//!     let catalog = Arc::new(GhibliClient::new(cache.clone()));
//!     let movies = MovieService::new(catalog, cache);
//!     println!("{}", serde_json::to_string_pretty(&movies.list_movies().await?)?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::MokaCacheStore;
pub use adapters::catalog::GhibliClient;
pub use domain::models::{Actor, Cast, Config, Film};
pub use domain::ports::{CacheStore, CatalogClient};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AccessGate, Aggregator, MovieService};
