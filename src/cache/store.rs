//! Cache Store Module
//!
//! Single-threaded cache engine: named partitions of keyed entries sharing one
//! expiry window. Concurrent access goes through [`super::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

type Partition = HashMap<String, CacheEntry>;

// == Cache Store ==
/// Partitioned cache storage with write-time expiry.
#[derive(Debug)]
pub struct CacheStore {
    /// Partition name -> entries, created lazily on first write
    partitions: HashMap<String, Partition>,
    /// Performance statistics
    stats: CacheStats,
    /// Expiry window applied to every entry
    expiry: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `expiry_secs` seconds.
    pub fn new(expiry_secs: u64) -> Self {
        Self {
            partitions: HashMap::new(),
            stats: CacheStats::new(),
            expiry: Duration::from_secs(expiry_secs),
        }
    }

    /// Expiry window applied to every partition.
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    // == Put ==
    /// Stores a value, replacing any previous entry and resetting its age.
    pub fn put(&mut self, partition: &str, key: String, value: String) {
        self.partitions
            .entry(partition.to_string())
            .or_default()
            .insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Retrieves a live value.
    ///
    /// Expired entries are dropped on the spot and counted as misses.
    pub fn get(&mut self, partition: &str, key: &str) -> Option<String> {
        let expiry = self.expiry;
        let Some(entries) = self.partitions.get_mut(partition) else {
            self.stats.record_miss();
            return None;
        };

        let expired = match entries.get(key) {
            Some(entry) => entry.is_expired(expiry),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        entries.get(key).map(|entry| entry.value.clone())
    }

    // == Evict ==
    /// Removes a single entry. Returns whether something was removed.
    pub fn evict(&mut self, partition: &str, key: &str) -> bool {
        let removed = self
            .partitions
            .get_mut(partition)
            .and_then(|entries| entries.remove(key))
            .is_some();
        if removed {
            self.stats.record_evictions(1);
        }
        removed
    }

    // == Evict All ==
    /// Empties a partition. Returns the number of entries removed.
    pub fn evict_all(&mut self, partition: &str) -> usize {
        let count = match self.partitions.get_mut(partition) {
            Some(entries) => {
                let count = entries.len();
                entries.clear();
                count
            }
            None => 0,
        };
        self.stats.record_evictions(count);
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.len();
        stats.partitions = self.partitions.len();
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from every partition.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expiry = self.expiry;
        let mut removed = 0;
        for entries in self.partitions.values_mut() {
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired(expiry));
            removed += before - entries.len();
        }
        self.stats.record_expirations(removed);
        removed
    }

    /// Number of entries held in one partition, expired ones included.
    pub fn partition_len(&self, partition: &str) -> usize {
        self.partitions.get(partition).map_or(0, HashMap::len)
    }

    // == Length ==
    /// Returns the number of entries across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.values().map(HashMap::len).sum()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
