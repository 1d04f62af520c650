//! Retry Policy
//!
//! Exponential-backoff retry for a single upstream call. The policy only
//! decides *whether* and *how long* to wait; the classifier passed by the
//! caller decides *which* failures are transient. Terminal failures are
//! propagated immediately, and the final transient failure is reraised
//! rather than swallowed.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{AgentError, Result};

/// Backoff configuration for one wrapped upstream call
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Total attempts, including the first (1 = no retries)
    pub max_attempts: u32,

    /// Delay before the first retry; also the backoff floor
    pub base_delay: Duration,

    /// Backoff ceiling
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Delay before the retry following the given attempt (1-indexed).
    /// Doubles per attempt, clamped to `[base_delay, max_delay]`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.base_delay.as_secs_f64();
        let raw = base * 2f64.powi(attempt.saturating_sub(1) as i32);
        Duration::from_secs_f64(raw.clamp(base, self.max_delay.as_secs_f64()))
    }
}

/// Run `operation` under the retry policy.
///
/// `classifier` returns `true` for transient failures worth retrying.
/// Each retry is logged before the backoff sleep. Both the in-flight
/// attempt and the sleep are interruptible through `cancel`, yielding
/// [`AgentError::Cancelled`].
pub async fn call_with_retry<T, F, Fut, C>(
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    classifier: C,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    C: Fn(&AgentError) -> bool,
{
    let mut attempt: u32 = 1;

    loop {
        // Cancellation must win over an already-completed attempt.
        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(AgentError::Cancelled),
            outcome = operation() => outcome,
        };

        match outcome {
            Ok(value) => return Ok(value),
            Err(err) if classifier(&err) && attempt < policy.max_attempts => {
                let delay = policy.delay_for_attempt(attempt);
                tracing::info!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "transient upstream failure, retrying after backoff"
                );
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => return Err(AgentError::Cancelled),
                    () = tokio::time::sleep(delay) => {}
                }
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn transient() -> AgentError {
        AgentError::RateLimited("slow down".into())
    }

    #[test]
    fn delay_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for_attempt(1), Duration::from_secs(2));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_secs(4));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_secs(8));
        assert_eq!(policy.delay_for_attempt(4), Duration::from_secs(16));
    }

    #[test]
    fn delay_is_capped_at_ceiling() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for_attempt(5), Duration::from_secs(30));
        assert_eq!(policy.delay_for_attempt(10), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn four_transient_failures_then_success() {
        let calls = AtomicU32::new(0);
        let result = call_with_retry(
            &RetryPolicy::default(),
            &CancellationToken::new(),
            AgentError::is_retryable,
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n < 5 { Err(transient()) } else { Ok(n) }
                }
            },
        )
        .await;

        assert_eq!(result.unwrap(), 5);
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn all_transient_reraises_after_five_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = call_with_retry(
            &RetryPolicy::default(),
            &CancellationToken::new(),
            AgentError::is_retryable,
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(transient()) }
            },
        )
        .await;

        assert!(matches!(result, Err(AgentError::RateLimited(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_failure_is_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = call_with_retry(
            &RetryPolicy::default(),
            &CancellationToken::new(),
            AgentError::is_retryable,
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(AgentError::Auth("bad key".into())) }
            },
        )
        .await;

        assert!(matches!(result, Err(AgentError::Auth(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_interrupts_backoff_sleep() {
        let cancel = CancellationToken::new();
        let calls = AtomicU32::new(0);

        let handle = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                // Give the first attempt time to fail and enter backoff.
                tokio::time::sleep(Duration::from_millis(500)).await;
                cancel.cancel();
            })
        };

        let result: Result<()> = call_with_retry(
            &RetryPolicy::default(),
            &cancel,
            AgentError::is_retryable,
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(transient()) }
            },
        )
        .await;

        assert!(matches!(result, Err(AgentError::Cancelled)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        handle.await.unwrap();
    }
}
