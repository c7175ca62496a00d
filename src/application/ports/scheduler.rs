//! Retry scheduling port interface

use std::time::Duration;

use crate::domain::notification::NotificationRequest;

/// Port for the host event loop's deferred-callback facility.
///
/// A retry is an explicit task value, not a captured closure: the scheduler
/// only holds the request and delivers it back for re-dispatch after the
/// delay. Scheduling must not block; there is no cancellation.
pub trait RetryScheduler: Send + Sync {
    /// Schedule `request` to be re-dispatched after `delay`
    fn schedule_after(&self, delay: Duration, request: NotificationRequest);
}
