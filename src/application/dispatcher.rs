//! Notification dispatch use case

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::domain::notification::NotificationRequest;
use crate::domain::retry::RetryPolicy;

use super::ports::{DiagnosticSink, NotificationError, Notifier, RetryScheduler};

/// One-time warning emitted the first time the service turns out to be absent
pub const SERVICE_UNAVAILABLE_WARNING: &str = "\
Notification service is not running (yet). Desktop notifications cannot be shown!
  A few more delivery attempts will be made shortly. Set `retries = 0`
  in the config file to give up immediately instead.";

/// Best-effort notification dispatcher.
///
/// Attempts to show a notification through the [`Notifier`] port. When the
/// service is unavailable (typically a desktop-session startup race), the
/// failure is absorbed and the identical request is re-scheduled after a
/// fixed delay, up to the policy's budget. The budget and the warn-once
/// flag are shared across every request this dispatcher handles.
///
/// Any error other than service-unavailable is returned to the caller
/// unchanged; the catch is deliberately this narrow.
pub struct NotificationDispatcher<N, S, D>
where
    N: Notifier,
    S: RetryScheduler,
    D: DiagnosticSink,
{
    notifier: N,
    scheduler: S,
    diagnostics: D,
    policy: RetryPolicy,
    retries_left: AtomicU32,
    warned: AtomicBool,
}

impl<N, S, D> NotificationDispatcher<N, S, D>
where
    N: Notifier,
    S: RetryScheduler,
    D: DiagnosticSink,
{
    /// Create a dispatcher with the default retry policy
    pub fn new(notifier: N, scheduler: S, diagnostics: D) -> Self {
        Self::with_policy(notifier, scheduler, diagnostics, RetryPolicy::default())
    }

    /// Create a dispatcher with an explicit retry policy
    pub fn with_policy(notifier: N, scheduler: S, diagnostics: D, policy: RetryPolicy) -> Self {
        Self {
            notifier,
            scheduler,
            diagnostics,
            policy,
            retries_left: AtomicU32::new(policy.limit),
            warned: AtomicBool::new(false),
        }
    }

    /// Attempt to show a notification.
    ///
    /// Returns without blocking: on a service-unavailable failure the retry
    /// is scheduled through the [`RetryScheduler`] port and `Ok(())` is
    /// returned, so the caller never observes that failure class. All other
    /// errors propagate unchanged.
    pub async fn dispatch(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        match self.notifier.show(request).await {
            Ok(()) => Ok(()),
            Err(NotificationError::ServiceUnavailable(_)) => {
                self.warn_once();
                if self.consume_retry() {
                    self.scheduler
                        .schedule_after(self.policy.interval, request.clone());
                }
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Remaining retry budget, shared across all requests
    pub fn retries_remaining(&self) -> u32 {
        self.retries_left.load(Ordering::SeqCst)
    }

    /// Whether the one-time warning has been emitted
    pub fn has_warned(&self) -> bool {
        self.warned.load(Ordering::SeqCst)
    }

    /// Retry policy this dispatcher was built with
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    fn warn_once(&self) {
        if !self.warned.swap(true, Ordering::SeqCst) {
            self.diagnostics.warn(SERVICE_UNAVAILABLE_WARNING);
        }
    }

    /// Take one retry from the budget; fails once the budget hits zero
    fn consume_retry(&self) -> bool {
        self.retries_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}
