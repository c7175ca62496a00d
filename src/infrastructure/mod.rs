//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the notification service, the tokio timer,
//! the console, and the config file.

pub mod config;
pub mod diagnostics;
pub mod notification;
pub mod scheduler;

// Re-export adapters
pub use config::XdgConfigStore;
pub use diagnostics::ConsoleDiagnostics;
pub use notification::{
    create_notifier, NotificationBackend, NotifyRustNotifier, NotifySendNotifier,
    ParseBackendError,
};
pub use scheduler::{RetryQueue, TokioRetryScheduler};
