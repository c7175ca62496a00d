//! Domain layer - Core business logic
//!
//! Contains value objects, retry policy, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;
pub mod retry;

// Re-export common types
pub use config::AppConfig;
pub use error::ConfigError;
pub use notification::NotificationRequest;
pub use retry::RetryPolicy;
