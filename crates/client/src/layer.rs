//! Typed data access layer: the API client behind the query cache.

use shrimptrack_core::{
    BatchStats, Customer, CustomerStats, DashboardStats, DemoUser, LoginResponse, Order,
    OrderStats, PageQuery, Paginated,
};

use crate::api::ApiClient;
use crate::cache::{CacheConfig, QueryCache, QueryValue};
use crate::error::QueryError;
use crate::keys::{KeyGroup, QueryKey};
use crate::retry::{RetryPolicy, run_with_retry};

/// Typed accessors over the shared query cache.
///
/// Queries go through the cache (staleness, coalescing, retries); mutations
/// call the API directly and invalidate the keys they affect. Cheaply
/// cloneable; clones share one cache.
#[derive(Clone)]
pub struct DataLayer {
    api: ApiClient,
    cache: QueryCache,
}

impl DataLayer {
    /// Build a data layer over `api` with the given cache configuration.
    #[must_use]
    pub fn new(api: ApiClient, config: CacheConfig) -> Self {
        Self {
            api,
            cache: QueryCache::new(config),
        }
    }

    /// The underlying cache, for explicit invalidation.
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    // =========================================================================
    // Queries (cached)
    // =========================================================================

    /// Paginated customer list.
    ///
    /// # Errors
    ///
    /// Returns an error once the retry policy is exhausted.
    pub async fn customers(&self, query: PageQuery) -> Result<Paginated<Customer>, QueryError> {
        let api = self.api.clone();
        let key = QueryKey::Customers {
            limit: query.limit,
            offset: query.offset,
        };
        let value = self
            .cache
            .fetch(key, move || {
                let api = api.clone();
                async move { api.customers(query).await.map(QueryValue::Customers) }
            })
            .await?;
        match value {
            QueryValue::Customers(page) => Ok(page),
            other => Err(unexpected(other.kind())),
        }
    }

    /// Customer aggregate stats.
    ///
    /// # Errors
    ///
    /// Returns an error once the retry policy is exhausted.
    pub async fn customer_stats(&self) -> Result<CustomerStats, QueryError> {
        let api = self.api.clone();
        let value = self
            .cache
            .fetch(QueryKey::CustomerStats, move || {
                let api = api.clone();
                async move { api.customer_stats().await.map(QueryValue::CustomerStats) }
            })
            .await?;
        match value {
            QueryValue::CustomerStats(stats) => Ok(stats),
            other => Err(unexpected(other.kind())),
        }
    }

    /// Paginated order list.
    ///
    /// # Errors
    ///
    /// Returns an error once the retry policy is exhausted.
    pub async fn orders(&self, query: PageQuery) -> Result<Paginated<Order>, QueryError> {
        let api = self.api.clone();
        let key = QueryKey::Orders {
            limit: query.limit,
            offset: query.offset,
        };
        let value = self
            .cache
            .fetch(key, move || {
                let api = api.clone();
                async move { api.orders(query).await.map(QueryValue::Orders) }
            })
            .await?;
        match value {
            QueryValue::Orders(page) => Ok(page),
            other => Err(unexpected(other.kind())),
        }
    }

    /// Order aggregate stats.
    ///
    /// # Errors
    ///
    /// Returns an error once the retry policy is exhausted.
    pub async fn order_stats(&self) -> Result<OrderStats, QueryError> {
        let api = self.api.clone();
        let value = self
            .cache
            .fetch(QueryKey::OrderStats, move || {
                let api = api.clone();
                async move { api.order_stats().await.map(QueryValue::OrderStats) }
            })
            .await?;
        match value {
            QueryValue::OrderStats(stats) => Ok(stats),
            other => Err(unexpected(other.kind())),
        }
    }

    /// Hatchery batch summary.
    ///
    /// # Errors
    ///
    /// Returns an error once the retry policy is exhausted.
    pub async fn batch_stats(&self) -> Result<BatchStats, QueryError> {
        let api = self.api.clone();
        let value = self
            .cache
            .fetch(QueryKey::BatchStats, move || {
                let api = api.clone();
                async move { api.batch_stats().await.map(QueryValue::BatchStats) }
            })
            .await?;
        match value {
            QueryValue::BatchStats(stats) => Ok(stats),
            other => Err(unexpected(other.kind())),
        }
    }

    /// Combined dashboard aggregates.
    ///
    /// # Errors
    ///
    /// Returns an error once the retry policy is exhausted.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, QueryError> {
        let api = self.api.clone();
        let value = self
            .cache
            .fetch(QueryKey::DashboardStats, move || {
                let api = api.clone();
                async move { api.dashboard_stats().await.map(QueryValue::DashboardStats) }
            })
            .await?;
        match value {
            QueryValue::DashboardStats(stats) => Ok(stats),
            other => Err(unexpected(other.kind())),
        }
    }

    /// The user behind `token`, cached under the current-user key.
    ///
    /// # Errors
    ///
    /// Returns an error once the retry policy is exhausted.
    pub async fn current_user(&self, token: &str) -> Result<DemoUser, QueryError> {
        let api = self.api.clone();
        let token = token.to_string();
        let value = self
            .cache
            .fetch(QueryKey::CurrentUser, move || {
                let api = api.clone();
                let token = token.clone();
                async move { api.me(&token).await.map(QueryValue::CurrentUser) }
            })
            .await?;
        match value {
            QueryValue::CurrentUser(user) => Ok(user),
            other => Err(unexpected(other.kind())),
        }
    }

    // =========================================================================
    // Mutations (never cached)
    // =========================================================================

    /// Log in with a demo credential pair and drop the cached identity.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Api` with status 401 for any non-demo pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, QueryError> {
        let api = self.api.clone();
        let email = email.to_string();
        let password = password.to_string();
        let response = run_with_retry(self.mutation_retry(), || {
            let api = api.clone();
            let email = email.clone();
            let password = password.clone();
            async move { api.login(&email, &password).await }
        })
        .await?;

        // A new identity invalidates the cached current user
        self.cache.invalidate(&QueryKey::CurrentUser).await;
        Ok(response)
    }

    /// Log out and drop everything cached for the old identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn logout(&self) -> Result<(), QueryError> {
        let api = self.api.clone();
        run_with_retry(self.mutation_retry(), || {
            let api = api.clone();
            async move { api.logout().await }
        })
        .await?;

        self.cache.invalidate_all().await;
        Ok(())
    }

    // =========================================================================
    // Invalidation & prefetch
    // =========================================================================

    /// Drop every cached aggregate (customer, order, batch, and dashboard
    /// stats) so the next read refetches. List keys are untouched.
    pub fn invalidate_stats(&self) {
        self.cache.invalidate_group(KeyGroup::Stats);
    }

    /// Drop every key in `group`.
    pub fn invalidate_group(&self, group: KeyGroup) {
        self.cache.invalidate_group(group);
    }

    /// Warm the order, customer, and batch stats keys in parallel before
    /// the dashboard renders, so the first paint has no loading spinners.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error.
    pub async fn prefetch_dashboard(&self) -> Result<(), QueryError> {
        futures::try_join!(
            self.order_stats(),
            self.customer_stats(),
            self.batch_stats(),
        )?;
        Ok(())
    }

    fn mutation_retry(&self) -> RetryPolicy {
        if self.cache.config().retry_mutations {
            self.cache.config().retry
        } else {
            RetryPolicy::NONE
        }
    }
}

fn unexpected(kind: &str) -> QueryError {
    QueryError::Internal(format!("unexpected cached payload kind: {kind}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutations_are_not_retried_by_default() {
        let layer = DataLayer::new(ApiClient::new("http://localhost:3000"), CacheConfig::default());
        assert_eq!(layer.mutation_retry().max_attempts, 1);
    }

    #[test]
    fn test_mutation_retry_opt_in() {
        let config = CacheConfig {
            retry_mutations: true,
            ..CacheConfig::default()
        };
        let layer = DataLayer::new(ApiClient::new("http://localhost:3000"), config);
        assert_eq!(layer.mutation_retry().max_attempts, 3);
    }
}
