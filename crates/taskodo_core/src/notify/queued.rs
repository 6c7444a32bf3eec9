//! Queue-backed notifier for hosts that schedule asynchronously.
//!
//! The host drains queued requests, schedules them on the platform, and
//! reports each handle back through `TaskStore::attach_notification`.

use super::{NotificationHandle, Notifier, NotifyResult, ReminderRequest, ScheduleReceipt};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct QueuedNotifier {
    schedule_requests: Mutex<Vec<ReminderRequest>>,
    cancellations: Mutex<Vec<NotificationHandle>>,
}

impl QueuedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all pending schedule requests in request order.
    pub fn take_schedule_requests(&self) -> Vec<ReminderRequest> {
        let mut guard = self
            .schedule_requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *guard)
    }

    /// Removes and returns all pending cancellations in request order.
    pub fn take_cancellations(&self) -> Vec<NotificationHandle> {
        let mut guard = self
            .cancellations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *guard)
    }
}

impl Notifier for QueuedNotifier {
    fn schedule(&self, request: &ReminderRequest) -> NotifyResult<ScheduleReceipt> {
        self.schedule_requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());
        Ok(ScheduleReceipt::Deferred)
    }

    fn cancel(&self, handle: &NotificationHandle) -> NotifyResult<()> {
        self.cancellations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(handle.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::QueuedNotifier;
    use crate::notify::{
        NotificationHandle, Notifier, ReminderRequest, ReminderTicket, ScheduleReceipt,
    };
    use chrono::DateTime;
    use uuid::Uuid;

    #[test]
    fn drains_requests_once() {
        let notifier = QueuedNotifier::new();
        let request = ReminderRequest {
            ticket: ReminderTicket {
                task_id: Uuid::new_v4(),
                generation: 1,
            },
            title: "pay rent".to_string(),
            fire_at: DateTime::parse_from_rfc3339("2024-01-01T10:00:00+00:00").unwrap(),
        };

        assert_eq!(
            notifier.schedule(&request).unwrap(),
            ScheduleReceipt::Deferred
        );
        notifier.cancel(&NotificationHandle::new("n-1")).unwrap();

        assert_eq!(notifier.take_schedule_requests(), vec![request]);
        assert!(notifier.take_schedule_requests().is_empty());
        assert_eq!(
            notifier.take_cancellations(),
            vec![NotificationHandle::new("n-1")]
        );
    }
}
