//! Shared query cache over moka.
//!
//! Entries are keyed by [`QueryKey`] and carry the instant they were
//! fetched. A read within the stale window is served from the cache; a
//! stale or absent entry triggers a fetch through the retry policy.
//! Concurrent fetches of the same key coalesce onto a single in-flight
//! request, so at most one network call per key is outstanding at a time.
//! Entries are garbage-collected by moka after the GC time.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::future::Cache;

use shrimptrack_core::{
    BatchStats, Customer, CustomerStats, DashboardStats, DemoUser, Order, OrderStats, Paginated,
};

use crate::error::QueryError;
use crate::keys::{KeyGroup, QueryKey};
use crate::retry::{RetryPolicy, run_with_retry};

/// Cache tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Age after which a cached result is refetched on access (5 minutes).
    pub stale_time: Duration,
    /// Age after which an entry is evicted outright (10 minutes).
    pub gc_time: Duration,
    /// Retry policy for query fetches.
    pub retry: RetryPolicy,
    /// Whether mutations go through the retry policy. Off: a failed write
    /// must surface immediately rather than be silently reissued.
    pub retry_mutations: bool,
    /// Fetch when a view mounts (serving the cached value if fresh).
    pub refetch_on_mount: bool,
    /// Refetch when the window regains focus. Off for the dashboard.
    pub refetch_on_focus: bool,
    /// Upper bound on cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            gc_time: Duration::from_secs(10 * 60),
            retry: RetryPolicy::default(),
            retry_mutations: false,
            refetch_on_mount: true,
            refetch_on_focus: false,
            max_capacity: 1000,
        }
    }
}

/// Cached payload kinds, one per resource in the key registry.
#[derive(Debug, Clone)]
pub enum QueryValue {
    Customers(Paginated<Customer>),
    CustomerStats(CustomerStats),
    Orders(Paginated<Order>),
    OrderStats(OrderStats),
    BatchStats(BatchStats),
    DashboardStats(DashboardStats),
    CurrentUser(DemoUser),
}

impl QueryValue {
    /// Payload kind name, for mismatch diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Customers(_) => "customers",
            Self::CustomerStats(_) => "customer_stats",
            Self::Orders(_) => "orders",
            Self::OrderStats(_) => "order_stats",
            Self::BatchStats(_) => "batch_stats",
            Self::DashboardStats(_) => "dashboard_stats",
            Self::CurrentUser(_) => "current_user",
        }
    }
}

#[derive(Clone)]
struct CachedEntry {
    value: QueryValue,
    fetched_at: Instant,
}

/// Shared request cache with staleness, coalescing, and group invalidation.
///
/// Cheaply cloneable; clones share the same underlying cache.
#[derive(Clone)]
pub struct QueryCache {
    cache: Cache<QueryKey, CachedEntry>,
    config: CacheConfig,
}

impl QueryCache {
    /// Create a cache with the given configuration.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.gc_time)
            .support_invalidation_closures()
            .build();

        Self { cache, config }
    }

    /// The configuration this cache was built with.
    #[must_use]
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Resolve `key`, fetching through `fetch` when the entry is absent or
    /// stale. Concurrent callers for the same key share one in-flight fetch
    /// and its result; fetch errors are shared by the waiters but never
    /// cached.
    ///
    /// # Errors
    ///
    /// Returns the fetch error once the retry policy is exhausted.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetch: F) -> Result<QueryValue, QueryError>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<QueryValue, QueryError>> + Send,
    {
        if let Some(entry) = self.cache.get(&key).await {
            if entry.fetched_at.elapsed() < self.config.stale_time {
                tracing::debug!(?key, "cache hit");
                return Ok(entry.value);
            }
            tracing::debug!(?key, "cache entry stale");
            self.cache.invalidate(&key).await;
        }

        let retry = self.config.retry;
        let entry = self
            .cache
            .try_get_with(key, async move {
                let value = run_with_retry(retry, fetch).await?;
                Ok(CachedEntry {
                    value,
                    fetched_at: Instant::now(),
                })
            })
            .await
            .map_err(|err: Arc<QueryError>| (*err).clone())?;

        Ok(entry.value)
    }

    /// Drop one key.
    pub async fn invalidate(&self, key: &QueryKey) {
        self.cache.invalidate(key).await;
    }

    /// Drop every key in a group. Keys outside the group are untouched.
    pub fn invalidate_group(&self, group: KeyGroup) {
        if let Err(err) = self
            .cache
            .invalidate_entries_if(move |key, _| key.group() == group)
        {
            // Only reachable if invalidation closures were not enabled at
            // build time, which `new` always does.
            tracing::error!(error = %err, "group invalidation rejected");
        }
    }

    /// Drop everything.
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn stats_value() -> QueryValue {
        QueryValue::BatchStats(BatchStats {
            active_batches: 1,
            total_population: 1000,
            average_survival_rate: 0.9,
            total_biomass_kg: 10.0,
            health: shrimptrack_core::BatchHealthBuckets {
                healthy: 1,
                monitor: 0,
                critical: 0,
            },
        })
    }

    type BoxFetch =
        std::pin::Pin<Box<dyn Future<Output = Result<QueryValue, QueryError>> + Send>>;

    fn counting_fetch(counter: Arc<AtomicU32>) -> impl Fn() -> BoxFetch + Send + Sync {
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Ok(stats_value()) }) as BoxFetch
        }
    }

    #[tokio::test]
    async fn test_fresh_hit_skips_fetch() {
        let cache = QueryCache::new(CacheConfig::default());
        let calls = Arc::new(AtomicU32::new(0));

        for _ in 0..3 {
            cache
                .fetch(QueryKey::BatchStats, counting_fetch(calls.clone()))
                .await
                .expect("fetch");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_entry_refetches() {
        let config = CacheConfig {
            stale_time: Duration::ZERO,
            ..CacheConfig::default()
        };
        let cache = QueryCache::new(config);
        let calls = Arc::new(AtomicU32::new(0));

        for _ in 0..2 {
            cache
                .fetch(QueryKey::BatchStats, counting_fetch(calls.clone()))
                .await
                .expect("fetch");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_fetches_share_one_call() {
        let cache = QueryCache::new(CacheConfig::default());
        let calls = Arc::new(AtomicU32::new(0));

        let slow_fetch = {
            let calls = calls.clone();
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                Box::pin(async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(stats_value())
                }) as BoxFetch
            }
        };

        let (a, b, c) = tokio::join!(
            cache.fetch(QueryKey::BatchStats, slow_fetch.clone()),
            cache.fetch(QueryKey::BatchStats, slow_fetch.clone()),
            cache.fetch(QueryKey::BatchStats, slow_fetch.clone()),
        );
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_group_invalidation_spares_unrelated_keys() {
        let cache = QueryCache::new(CacheConfig::default());
        let stats_keys = [
            QueryKey::CustomerStats,
            QueryKey::OrderStats,
            QueryKey::BatchStats,
            QueryKey::DashboardStats,
        ];
        let list_key = QueryKey::Customers {
            limit: 10,
            offset: 0,
        };

        let calls = Arc::new(AtomicU32::new(0));
        for key in stats_keys {
            cache
                .fetch(key, counting_fetch(calls.clone()))
                .await
                .expect("prime");
        }
        let list_calls = Arc::new(AtomicU32::new(0));
        cache
            .fetch(list_key, counting_fetch(list_calls.clone()))
            .await
            .expect("prime list");

        cache.invalidate_group(KeyGroup::Stats);

        // Exactly one refetch per stats key
        for key in stats_keys {
            cache
                .fetch(key, counting_fetch(calls.clone()))
                .await
                .expect("refetch");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 8);

        // The customers list key was not touched
        cache
            .fetch(list_key, counting_fetch(list_calls.clone()))
            .await
            .expect("list still cached");
        assert_eq!(list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = QueryCache::new(CacheConfig::default());
        let calls = Arc::new(AtomicU32::new(0));

        let flaky = {
            let calls = calls.clone();
            move || {
                let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
                Box::pin(async move {
                    if attempt == 1 {
                        // Non-retryable, so the first fetch fails outright
                        Err(QueryError::Api {
                            status: 404,
                            message: "missing".to_string(),
                        })
                    } else {
                        Ok(stats_value())
                    }
                }) as BoxFetch
            }
        };

        assert!(
            cache
                .fetch(QueryKey::BatchStats, flaky.clone())
                .await
                .is_err()
        );
        assert!(
            cache
                .fetch(QueryKey::BatchStats, flaky.clone())
                .await
                .is_ok()
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
