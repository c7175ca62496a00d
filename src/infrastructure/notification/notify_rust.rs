//! Notification adapter using notify-rust

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::app_config::DEFAULT_APP_NAME;
use crate::domain::notification::NotificationRequest;

use super::is_service_unavailable;

/// Notifier using notify-rust over the session bus
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        let request = request.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut toast = notify_rust::Notification::new();
            toast.appname(&app_name).summary(&request.summary);
            if let Some(body) = request.body.as_deref() {
                toast.body(body);
            }
            if let Some(icon) = request.icon.as_deref() {
                toast.icon(icon);
            }

            toast.show().map(|_| ()).map_err(map_show_error)
        })
        .await
        .map_err(|e| NotificationError::ShowFailed(format!("Task join error: {}", e)))?
    }
}

/// notify-rust does not expose the D-Bus error kind directly, so the
/// absent-service case is recognized from the rendered message
fn map_show_error(error: notify_rust::error::Error) -> NotificationError {
    let message = error.to_string();
    if is_service_unavailable(&message) {
        NotificationError::ServiceUnavailable(message)
    } else {
        NotificationError::ShowFailed(message)
    }
}
