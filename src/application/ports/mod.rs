//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod diagnostics;
pub mod notifier;
pub mod scheduler;

// Re-export common types
pub use config::ConfigStore;
pub use diagnostics::DiagnosticSink;
pub use notifier::{NotificationError, Notifier};
pub use scheduler::RetryScheduler;
