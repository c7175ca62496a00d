//! Tokio retry scheduler adapter

use std::time::Duration;

use tokio::sync::mpsc;

use crate::application::ports::RetryScheduler;
use crate::domain::notification::NotificationRequest;

/// Queue of retry tasks that have become due.
///
/// The driver loop receives re-dispatchable requests from here; each
/// arrives only after its scheduled delay has elapsed.
pub struct RetryQueue {
    rx: mpsc::UnboundedReceiver<NotificationRequest>,
}

impl RetryQueue {
    /// Wait for the next due request.
    ///
    /// Returns `None` once the scheduler and all in-flight timers are gone.
    pub async fn next_due(&mut self) -> Option<NotificationRequest> {
        self.rx.recv().await
    }
}

/// Scheduler backed by the tokio timer.
///
/// Each scheduled task sleeps on its own spawned timer and is then
/// delivered into the queue; scheduling never blocks the caller and
/// offers no cancellation.
pub struct TokioRetryScheduler {
    tx: mpsc::UnboundedSender<NotificationRequest>,
}

impl TokioRetryScheduler {
    /// Create a scheduler and the queue its due tasks arrive on
    pub fn new() -> (Self, RetryQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, RetryQueue { rx })
    }
}

impl RetryScheduler for TokioRetryScheduler {
    fn schedule_after(&self, delay: Duration, request: NotificationRequest) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver dropped means the process is shutting down
            let _ = tx.send(request);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn due_task_arrives_after_the_delay() {
        let (scheduler, mut queue) = TokioRetryScheduler::new();
        let request = NotificationRequest::new("Hi");

        let start = tokio::time::Instant::now();
        scheduler.schedule_after(Duration::from_secs(3), request.clone());

        let due = queue.next_due().await.unwrap();
        assert_eq!(due, request);
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn tasks_arrive_in_scheduling_order_for_equal_delays() {
        let (scheduler, mut queue) = TokioRetryScheduler::new();
        scheduler.schedule_after(Duration::from_secs(3), NotificationRequest::new("first"));
        scheduler.schedule_after(Duration::from_secs(3), NotificationRequest::new("second"));

        assert_eq!(queue.next_due().await.unwrap().summary, "first");
        assert_eq!(queue.next_due().await.unwrap().summary, "second");
    }

    #[tokio::test]
    async fn scheduling_does_not_block_the_caller() {
        let (scheduler, _queue) = TokioRetryScheduler::new();

        let start = std::time::Instant::now();
        scheduler.schedule_after(Duration::from_secs(60), NotificationRequest::new("Hi"));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
