//! In-memory key-value store shared by actor lookups and the response cache.
//!
//! Uses `moka` for TTL-based concurrent caching of raw JSON payloads.

pub mod moka_store;

pub use moka_store::MokaCacheStore;
