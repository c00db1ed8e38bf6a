//! Cache Module
//!
//! Read-through cache of named partitions with a single write-time expiry
//! window. There is no size bound; entries leave by expiry or invalidation.

mod entry;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Expiry window applied to every partition (30 minutes)
pub const DEFAULT_EXPIRY_SECS: u64 = 1800;

/// Partition holding news listings, keyed by query
pub const NEWS: &str = "news";

/// Partition holding single comments, keyed by comment id
pub const COMMENT: &str = "comment";
