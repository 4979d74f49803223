//! In-memory `CacheStore` backed by moka.
//!
//! One store instance is shared process-wide by the actor lookups and the
//! aggregate response slot. The store applies a single eviction policy to
//! every key (time-to-live plus capacity); callers never pass an expiry.

use async_trait::async_trait;
use moka::future::Cache;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::DomainResult;
use crate::domain::models::CacheConfig;
use crate::domain::ports::CacheStore;

/// Default time-to-live for every entry.
const DEFAULT_TTL_SECS: u64 = 300;

/// Default maximum number of entries.
const DEFAULT_MAX_CAPACITY: u64 = 300;

/// Moka-backed key-value store.
///
/// Values are kept behind an `Arc` so a read hands out a cheap snapshot of
/// whatever was stored last. There is no locking above moka's own map:
/// concurrent writers to one key are last-write-wins.
#[derive(Clone)]
pub struct MokaCacheStore {
    entries: Cache<String, Arc<Value>>,
}

impl MokaCacheStore {
    /// Create a store with the default policy (300 entries, 300s TTL).
    pub fn new() -> Self {
        Self::with_policy(DEFAULT_MAX_CAPACITY, Some(Duration::from_secs(DEFAULT_TTL_SECS)))
    }

    /// Create a store from configuration; `ttl_secs == 0` disables expiry.
    pub fn from_config(config: &CacheConfig) -> Self {
        let ttl = (config.ttl_secs > 0).then(|| Duration::from_secs(config.ttl_secs));
        Self::with_policy(config.max_entries, ttl)
    }

    /// Create with an explicit capacity and optional time-to-live.
    pub fn with_policy(max_capacity: u64, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().max_capacity(max_capacity);
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            entries: builder.build(),
        }
    }

    /// Number of live entries (approximate until pending tasks run).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

impl Default for MokaCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MokaCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheStore")
            .field("entry_count", &self.entries.entry_count())
            .finish()
    }
}

#[async_trait]
impl CacheStore for MokaCacheStore {
    async fn get(&self, key: &str) -> DomainResult<Option<Value>> {
        Ok(self.entries.get(key).await.map(|v| (*v).clone()))
    }

    async fn set(&self, key: &str, value: Value) -> DomainResult<()> {
        self.entries.insert(key.to_string(), Arc::new(value)).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        self.entries.invalidate(key).await;
        Ok(())
    }

    async fn clear(&self) -> DomainResult<()> {
        self.entries.invalidate_all();
        Ok(())
    }
}
