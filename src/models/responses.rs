//! Response DTOs for the content API
//!
//! Entities serialize themselves; these cover the service endpoints and errors.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub evictions: u64,
    pub total_entries: usize,
    pub partitions: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Expiry window applied to every entry, in seconds
    pub expiry_secs: u64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, expiry_secs: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            partitions: stats.partitions,
            hit_rate: stats.hit_rate(),
            expiry_secs,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// When the error was produced, `dd-MM-yyyy HH:mm`
    pub local_date: String,
    /// Error message describing what went wrong
    pub message: String,
    /// Error class
    pub error: String,
}

impl ErrorResponse {
    pub fn new(
        local_date: impl Into<String>,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            local_date: local_date.into(),
            message: message.into(),
            error: error.into(),
        }
    }
}
