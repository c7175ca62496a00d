//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::retry::RetryPolicy;

/// Default application name reported to the notification service
pub const DEFAULT_APP_NAME: &str = "deskpop";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub icon: Option<String>,
    pub backend: Option<String>,
    pub retries: Option<u32>,
    pub retry_interval: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        let policy = RetryPolicy::default();
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            icon: None,
            backend: Some("notify-rust".to_string()),
            retries: Some(policy.limit),
            retry_interval: Some(policy.interval.as_secs()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            icon: other.icon.or(self.icon),
            backend: other.backend.or(self.backend),
            retries: other.retries.or(self.retries),
            retry_interval: other.retry_interval.or(self.retry_interval),
        }
    }

    /// Get the app name, or the default if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Build the retry policy from the configured values, falling back
    /// to the policy defaults for anything unset
    pub fn retry_policy(&self) -> RetryPolicy {
        let defaults = RetryPolicy::default();
        RetryPolicy {
            limit: self.retries.unwrap_or(defaults.limit),
            interval: self
                .retry_interval
                .map(Duration::from_secs)
                .unwrap_or(defaults.interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            app_name: Some("base".to_string()),
            icon: Some("dialog-information".to_string()),
            backend: Some("notify-send".to_string()),
            retries: Some(5),
            retry_interval: None,
        };
        let other = AppConfig {
            app_name: Some("other".to_string()),
            icon: None,
            backend: None,
            retries: Some(2),
            retry_interval: Some(10),
        };

        let merged = base.merge(other);
        assert_eq!(merged.app_name.as_deref(), Some("other"));
        assert_eq!(merged.icon.as_deref(), Some("dialog-information"));
        assert_eq!(merged.backend.as_deref(), Some("notify-send"));
        assert_eq!(merged.retries, Some(2));
        assert_eq!(merged.retry_interval, Some(10));
    }

    #[test]
    fn retry_policy_from_empty_config_is_default() {
        assert_eq!(AppConfig::empty().retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn retry_policy_from_explicit_values() {
        let config = AppConfig {
            retries: Some(1),
            retry_interval: Some(7),
            ..Default::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.limit, 1);
        assert_eq!(policy.interval, Duration::from_secs(7));
    }

    #[test]
    fn app_name_falls_back_to_default() {
        assert_eq!(AppConfig::empty().app_name_or_default(), "deskpop");
    }
}
