//! Key-value cache store port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainResult;

/// Process-wide key-value store holding raw JSON payloads.
///
/// Entries are written without a per-key expiry; eviction is entirely up to
/// the implementation's own policy. Implementations are not expected to
/// serialize writers: two concurrent `set` calls for the same key race and
/// the last write is the one later readers see. Every value stored here is a
/// re-derivation of immutable upstream data, so either write is correct.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Snapshot of the value stored under `key`, if any.
    async fn get(&self, key: &str) -> DomainResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> DomainResult<()>;

    /// Remove a single key.
    async fn delete(&self, key: &str) -> DomainResult<()>;

    /// Remove every key.
    async fn clear(&self) -> DomainResult<()>;
}
