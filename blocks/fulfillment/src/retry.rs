use std::future::Future;
use std::time::Duration;

/// Bounded retry with exponential backoff, applied around provider calls
/// by the worker. The provider clients themselves never retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    /// One attempt; redelivery is left to the queue.
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 1,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Delay slept after failed attempt `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor)
    }

    pub async fn run<T, E, F, Fut>(&self, label: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_attempts => {
                    let delay = self.delay_after(attempt);
                    tracing::warn!(
                        "🔁 {} failed (attempt {}/{}), retrying in {:?}: {}",
                        label,
                        attempt,
                        self.max_attempts,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn delays_double_per_attempt() {
        let policy = RetryPolicy::new(4, Duration::from_millis(100));
        assert_eq!(policy.delay_after(1), Duration::from_millis(100));
        assert_eq!(policy.delay_after(2), Duration::from_millis(200));
        assert_eq!(policy.delay_after(3), Duration::from_millis(400));
    }

    #[test]
    fn zero_attempts_is_clamped_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
    }

    #[tokio::test]
    async fn default_policy_makes_a_single_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = RetryPolicy::default()
            .run("op", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("boom".to_string())
            })
            .await;

        assert_eq!(result, Err("boom".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_until_success_within_budget() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::ZERO);

        let result: Result<u32, String> = policy
            .run("op", || async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(format!("fail {n}"))
                } else {
                    Ok(n)
                }
            })
            .await;

        assert_eq!(result, Ok(3));
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(2, Duration::ZERO);

        let result: Result<(), String> = policy
            .run("op", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("still down".to_string())
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
