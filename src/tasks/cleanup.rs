//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries. Lookups
//! already ignore stale entries; the sweep only keeps memory from holding
//! entries nobody reads again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that periodically drops expired cache entries.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Cache::new(1800);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: Cache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache expiry sweep with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{COMMENT, NEWS};

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Cache::new(1);
        cache.put(NEWS, "expire_soon", "[]".to_string()).await;
        cache.put(COMMENT, "expire_too", "{}".to_string()).await;

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for entries to expire and the sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(cache.partition_len(NEWS).await, 0);
        assert_eq!(cache.partition_len(COMMENT).await, 0);
        assert_eq!(cache.stats().await.expirations, 2);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Cache::new(3600);
        cache.put(NEWS, "long_lived", "[]".to_string()).await;

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get(NEWS, "long_lived").await.as_deref(), Some("[]"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(Cache::new(1800), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
