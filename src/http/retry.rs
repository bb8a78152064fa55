//! Retry policies for HTTP requests.
//!
//! Reads may retry; admin mutations never do. A repeated `addfunds` would
//! credit a user twice, and the backend offers no idempotency keys.

use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt. Always used for mutations.
    #[default]
    None,
    /// Retry on transport failures, 429 and 502/503/504 with exponential backoff.
    Idempotent,
    /// Caller-provided retry configuration.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// The effective config, or `None` for a single attempt.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial attempt.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// ±25% random spread on each delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// The default config for reads.
    pub fn idempotent() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    /// Delay before retry number `attempt` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let spread = capped * 0.25;
            (capped + (rand::random::<f64>() - 0.5) * 2.0 * spread).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(initial_ms: u64, max_ms: u64, factor: f64) -> RetryConfig {
        RetryConfig {
            max_retries: 5,
            initial_delay: Duration::from_millis(initial_ms),
            max_delay: Duration::from_millis(max_ms),
            backoff_factor: factor,
            jitter: false,
            retryable_statuses: vec![503],
        }
    }

    #[test]
    fn test_default_policy_is_single_attempt() {
        assert!(RetryPolicy::default().config().is_none());
    }

    #[test]
    fn test_idempotent_retries_gateway_errors_and_rate_limits() {
        let config = RetryPolicy::Idempotent.config().unwrap();
        for status in [429, 502, 503, 504] {
            assert!(config.is_retryable_status(status));
        }
        assert!(!config.is_retryable_status(500));
        assert!(!config.is_retryable_status(400));
    }

    #[test]
    fn test_delay_doubles_without_jitter() {
        let config = fixed(100, 10_000, 2.0);
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 400);
    }

    #[test]
    fn test_delay_is_capped() {
        let config = fixed(1000, 2000, 10.0);
        assert_eq!(config.delay_for_attempt(3).as_millis(), 2000);
    }

    #[test]
    fn test_jitter_stays_within_spread() {
        let config = RetryConfig {
            jitter: true,
            ..fixed(400, 10_000, 1.0)
        };
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((300..=500).contains(&ms), "delay {ms} out of range");
        }
    }
}
