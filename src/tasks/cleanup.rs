//! Expiry Sweep Task
//!
//! Background task that periodically removes expired search results.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SearchCache;

/// Shortest interval the sweep will run at
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps, independent of any read path. It only holds the write
/// lock for the duration of one sweep.
///
/// # Arguments
/// * `cache` - Shared reference to the result cache
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task; aborting it stops the sweep.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(SearchCache::new(200, Duration::from_secs(300))));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: Arc<RwLock<SearchCache>>, interval: Duration) -> JoinHandle<()> {
    let interval = interval.max(MIN_INTERVAL);

    tokio::spawn(async move {
        debug!(?interval, "starting cache expiry sweep");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Cleaned up {} expired cache entries", removed);
            } else {
                debug!("cache sweep: no expired entries found");
            }
        }
    })
}
