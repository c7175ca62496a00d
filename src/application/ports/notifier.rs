//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationRequest;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The notification service has no running owner. This is the only
    /// error kind the dispatcher absorbs and retries.
    #[error("Notification service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    ShowFailed(String),
}

/// Port for the desktop notification service binding
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `request` - The notification to display
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().show(request).await
    }
}
