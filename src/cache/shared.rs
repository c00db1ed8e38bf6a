//! Shared Cache Handle
//!
//! Cloneable, thread-safe front for [`CacheStore`]. Every operation takes the
//! lock for exactly one call, so callers never lock anything themselves.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};

/// Process-wide cache injected into the content service at startup.
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Arc<RwLock<CacheStore>>,
}

impl Cache {
    /// Creates a cache whose entries live for `expiry_secs` seconds.
    pub fn new(expiry_secs: u64) -> Self {
        Self::from_store(CacheStore::new(expiry_secs))
    }

    pub fn from_store(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns the cached value if present and inside the expiry window.
    pub async fn get(&self, partition: &str, key: &str) -> Option<String> {
        // Write lock: a stale entry is dropped during lookup.
        let value = self.inner.write().await.get(partition, key);
        debug!(partition, key, hit = value.is_some(), "cache lookup");
        value
    }

    /// (Re)inserts a value, resetting its insertion time.
    pub async fn put(&self, partition: &str, key: impl Into<String>, value: String) {
        let key = key.into();
        debug!(partition, key = %key, "cache put");
        self.inner.write().await.put(partition, key, value);
    }

    /// Removes a single key; no-op if absent.
    pub async fn evict(&self, partition: &str, key: &str) {
        let removed = self.inner.write().await.evict(partition, key);
        debug!(partition, key, removed, "cache evict");
    }

    /// Removes every entry of a partition; no-op if empty or unknown.
    pub async fn evict_all(&self, partition: &str) {
        let removed = self.inner.write().await.evict_all(partition);
        debug!(partition, removed, "cache evict all");
    }

    /// Drops expired entries from all partitions, returning how many went.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    /// Expiry window shared by every partition.
    pub async fn expiry(&self) -> Duration {
        self.inner.read().await.expiry()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    /// Entries currently held by a partition, expired ones included.
    pub async fn partition_len(&self, partition: &str) -> usize {
        self.inner.read().await.partition_len(partition)
    }
}
