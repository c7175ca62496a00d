//! Deskpop - best-effort desktop notifications
//!
//! This crate shows transient desktop notifications and retries delivery
//! while the notification service is still starting up (a common race
//! during desktop-session login).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (notification request, retry policy, config)
//! - **Application**: The dispatch use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send,
//!   tokio timer, console, XDG config)
//! - **CLI**: Command-line interface and the retry-driving runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
