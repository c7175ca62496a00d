//! Application layer - Use cases and port interfaces
//!
//! Contains the core dispatch operation and trait definitions
//! for external system interactions.

pub mod dispatcher;
pub mod ports;

// Re-export use cases
pub use dispatcher::{NotificationDispatcher, SERVICE_UNAVAILABLE_WARNING};
