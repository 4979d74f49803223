//! Port trait definitions (Hexagonal Architecture)
//!
//! - CacheStore: shared key-value store for raw upstream and aggregate payloads
//! - CatalogClient: read access to the remote film catalog
//!
//! Services depend on these traits only; adapters provide the implementations.

pub mod cache_store;
pub mod catalog;

pub use cache_store::CacheStore;
pub use catalog::CatalogClient;
