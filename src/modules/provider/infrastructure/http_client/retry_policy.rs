//! Retry policy for the Jikan fetcher
//!
//! Rate limiting (HTTP 429) and transient failures draw from the same retry
//! budget; the wait before retry `n` is `base_delay * multiplier^n`.

use std::time::Duration;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Multiplier applied per retry
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    /// Jikan: five retries, 1s doubling each time (1, 2, 4, 8, 16 seconds)
    pub fn jikan() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_secs(1),
            backoff_multiplier: 2.0,
        }
    }

    /// Same shape with a different base delay
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Delay to wait before retry number `retry` (0-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let multiplier = self.backoff_multiplier.powi(retry as i32);
        Duration::from_nanos((self.base_delay.as_nanos() as f64 * multiplier).round() as u64)
    }

    /// Whether another retry is allowed after `retries_done` retries
    pub fn can_retry(&self, retries_done: u32) -> bool {
        retries_done < self.max_retries
    }

    /// Upper bound on requests for one logical call
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::jikan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jikan_policy() {
        let policy = RetryPolicy::jikan();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.base_delay, Duration::from_secs(1));
        assert_eq!(policy.max_attempts(), 6);
    }

    #[test]
    fn test_delay_is_power_of_two_seconds() {
        let policy = RetryPolicy::jikan();
        for retry in 0..5 {
            assert_eq!(policy.delay_for(retry), Duration::from_secs(1 << retry));
        }
    }

    #[test]
    fn test_delays_increase_monotonically() {
        let policy = RetryPolicy::default();
        let delays: Vec<Duration> = (0..5).map(|r| policy.delay_for(r)).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_retry_budget() {
        let policy = RetryPolicy::jikan();
        assert!(policy.can_retry(0));
        assert!(policy.can_retry(4));
        assert!(!policy.can_retry(5));
    }

    #[test]
    fn test_custom_base_delay_keeps_doubling() {
        let policy = RetryPolicy::jikan().with_base_delay(Duration::from_millis(10));
        assert_eq!(policy.delay_for(0), Duration::from_millis(10));
        assert_eq!(policy.delay_for(3), Duration::from_millis(80));
    }
}
