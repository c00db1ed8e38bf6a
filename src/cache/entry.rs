//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with write-time expiry.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value (a JSON document)
    pub value: String,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: String) -> Self {
        Self {
            value,
            inserted_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was inserted.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived the expiry window.
    ///
    /// Boundary condition: an entry is live only while its age is strictly
    /// below the window, so it expires the moment the window has fully elapsed.
    pub fn is_expired(&self, window: Duration) -> bool {
        u128::from(self.age_ms()) >= window.as_millis()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
