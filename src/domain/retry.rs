//! Retry policy value object

use std::time::Duration;

/// Default number of re-attempts after a failed dispatch
pub const DEFAULT_RETRY_LIMIT: u32 = 5;

/// Default delay between re-attempts
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(3);

/// How often and how many times a failed notification is retried.
///
/// The budget is shared across every request a dispatcher handles, not
/// per-request: once `limit` retries have been spent the dispatcher stops
/// scheduling for the rest of its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total retries permitted over the dispatcher's lifetime
    pub limit: u32,
    /// Fixed delay before each retry fires
    pub interval: Duration,
}

impl RetryPolicy {
    /// Create a policy with explicit values
    pub fn new(limit: u32, interval: Duration) -> Self {
        Self { limit, interval }
    }

    /// Policy that never retries
    pub fn disabled() -> Self {
        Self {
            limit: 0,
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RETRY_LIMIT,
            interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.limit, 5);
        assert_eq!(policy.interval, Duration::from_secs(3));
    }

    #[test]
    fn disabled_has_no_budget() {
        assert_eq!(RetryPolicy::disabled().limit, 0);
    }
}
