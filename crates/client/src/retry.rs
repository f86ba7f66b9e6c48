//! Retry policy for query fetches.

use std::future::Future;

use crate::error::QueryError;

/// Bounded retry: a failed fetch is reattempted while the error is
/// retryable (see [`QueryError::is_retryable`]) and the attempt cap has not
/// been reached. No backoff; the mock API is local.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first. 1 means no retries.
    pub max_attempts: u32,
}

impl RetryPolicy {
    /// Single attempt, used for mutations.
    pub const NONE: Self = Self { max_attempts: 1 };

    /// Whether another attempt should follow `attempts_made` failures.
    #[must_use]
    pub const fn should_retry(&self, attempts_made: u32, error: &QueryError) -> bool {
        attempts_made < self.max_attempts && error.is_retryable()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

/// Run `fetch` under the policy, returning the first success or the last
/// error once attempts are exhausted or the error is non-retryable.
pub async fn run_with_retry<F, Fut, T>(policy: RetryPolicy, fetch: F) -> Result<T, QueryError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, QueryError>>,
{
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        match fetch().await {
            Ok(value) => return Ok(value),
            Err(err) if policy.should_retry(attempts, &err) => {
                tracing::debug!(attempt = attempts, error = %err, "fetch failed, retrying");
            }
            Err(err) => return Err(err),
        }
    }
}
