//! Notification infrastructure module
//!
//! Provides desktop notification support using notify-rust (primary)
//! or the notify-send binary as fallback.

mod notify_rust;
mod notify_send;

pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use std::fmt;
use std::str::FromStr;

use crate::application::ports::Notifier;

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationBackend {
    /// Direct D-Bus binding via notify-rust (default)
    #[default]
    NotifyRust,
    /// Shell out to the notify-send binary
    NotifySend,
}

impl fmt::Display for NotificationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationBackend::NotifyRust => write!(f, "notify-rust"),
            NotificationBackend::NotifySend => write!(f, "notify-send"),
        }
    }
}

/// Error type for parsing a backend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid backend '{}'. Valid options: notify-rust, notify-send",
            self.value
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for NotificationBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notify-rust" => Ok(NotificationBackend::NotifyRust),
            "notify-send" => Ok(NotificationBackend::NotifySend),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create a notifier for the selected backend
pub fn create_notifier(
    backend: NotificationBackend,
    app_name: impl Into<String>,
) -> Box<dyn Notifier> {
    match backend {
        NotificationBackend::NotifyRust => Box::new(NotifyRustNotifier::with_app_name(app_name)),
        NotificationBackend::NotifySend => Box::new(NotifySendNotifier::with_app_name(app_name)),
    }
}

/// Classify a backend error message as "service absent" vs "service broken".
///
/// Both backends ultimately surface D-Bus failures as text; these markers
/// cover the no-running-owner and no-session-bus cases that appear during
/// desktop-session startup.
pub(crate) fn is_service_unavailable(message: &str) -> bool {
    const MARKERS: [&str; 5] = [
        "org.freedesktop.DBus.Error.ServiceUnknown",
        "ServiceUnknown",
        "NameHasNoOwner",
        "was not provided by any .service files",
        "Connection refused",
    ];

    MARKERS.iter().any(|marker| message.contains(marker))
}
