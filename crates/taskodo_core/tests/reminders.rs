use chrono::{DateTime, FixedOffset, NaiveDate};
use std::sync::{Arc, Mutex};
use taskodo_core::{
    Category, FixedClock, NewTaskRequest, NotificationHandle, Notifier, NotifyError,
    NotifyResult, Priority, QueuedNotifier, ReminderRequest, ScheduleReceipt,
    SqliteKeyValueStore, StoreConfig, TaskStore,
};

#[derive(Clone, Copy)]
enum Mode {
    Immediate,
    Failing,
}

/// Records every call and answers according to `mode`.
struct RecordingNotifier {
    mode: Mode,
    scheduled: Mutex<Vec<ReminderRequest>>,
    cancelled: Mutex<Vec<NotificationHandle>>,
}

impl RecordingNotifier {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            scheduled: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
        }
    }

    fn cancelled(&self) -> Vec<NotificationHandle> {
        self.cancelled.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn schedule(&self, request: &ReminderRequest) -> NotifyResult<ScheduleReceipt> {
        self.scheduled.lock().unwrap().push(request.clone());
        match self.mode {
            Mode::Immediate => Ok(ScheduleReceipt::Scheduled(NotificationHandle::new(format!(
                "n-{}",
                request.ticket.generation
            )))),
            Mode::Failing => Err(NotifyError::PermissionDenied),
        }
    }

    fn cancel(&self, handle: &NotificationHandle) -> NotifyResult<()> {
        self.cancelled.lock().unwrap().push(handle.clone());
        match self.mode {
            Mode::Immediate => Ok(()),
            Mode::Failing => Err(NotifyError::Backend("cancel failed".to_string())),
        }
    }
}

fn at(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap()
}

fn request(title: &str, due_date: &str, remind_after_minutes: u32) -> NewTaskRequest {
    NewTaskRequest {
        title: title.to_string(),
        due_date: NaiveDate::parse_from_str(due_date, "%Y-%m-%d").unwrap(),
        priority: Priority::High,
        category: Category::Work,
        remind_after_minutes,
        subtask_titles: Vec::new(),
    }
}

fn open_with(notifier: Arc<dyn Notifier>) -> TaskStore<SqliteKeyValueStore> {
    TaskStore::open(
        SqliteKeyValueStore::open_in_memory().unwrap(),
        notifier,
        Arc::new(FixedClock::new(at("2024-01-03T10:00:00+00:00"))),
        StoreConfig::default(),
    )
}

#[test]
fn synchronous_scheduler_attaches_handle_and_delete_cancels_it() {
    let notifier = Arc::new(RecordingNotifier::new(Mode::Immediate));
    let mut store = open_with(notifier.clone());

    let id = store.add_task(request("standup", "2024-01-03", 15)).unwrap();
    let handle = store.task(id).unwrap().notification_id.clone();
    assert_eq!(handle, Some(NotificationHandle::new("n-1")));

    let scheduled = notifier.scheduled.lock().unwrap().clone();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].fire_at, at("2024-01-03T10:15:00+00:00"));
    assert_eq!(scheduled[0].body(), "It's time for: standup");

    store.delete_task(id).unwrap();
    assert_eq!(notifier.cancelled(), vec![NotificationHandle::new("n-1")]);
}

#[test]
fn past_due_time_requests_no_reminder() {
    let notifier = Arc::new(RecordingNotifier::new(Mode::Immediate));
    let mut store = open_with(notifier.clone());

    let id = store.add_task(request("yesterday", "2024-01-02", 60)).unwrap();
    assert!(store.task(id).unwrap().notification_id.is_none());
    assert!(notifier.scheduled.lock().unwrap().is_empty());
}

#[test]
fn scheduler_failures_are_swallowed() {
    let notifier = Arc::new(RecordingNotifier::new(Mode::Failing));
    let mut store = open_with(notifier.clone());

    let id = store.add_task(request("no permission", "2024-01-04", 0)).unwrap();
    assert!(store.task(id).unwrap().notification_id.is_none());
    assert_eq!(store.tasks().len(), 1);
    assert!(store.delete_task(id).is_some());
}

#[test]
fn deferred_handle_attaches_to_live_task() {
    let notifier = Arc::new(QueuedNotifier::new());
    let mut store = open_with(notifier.clone());

    let id = store.add_task(request("dentist", "2024-01-05", 0)).unwrap();
    assert!(store.task(id).unwrap().notification_id.is_none());

    let pending = notifier.take_schedule_requests();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].task_id(), id);

    assert!(store.attach_notification(pending[0].ticket, NotificationHandle::new("os-7")));
    assert_eq!(
        store.task(id).unwrap().notification_id,
        Some(NotificationHandle::new("os-7"))
    );

    // A ticket resolves at most once.
    assert!(!store.attach_notification(pending[0].ticket, NotificationHandle::new("os-8")));
    assert_eq!(
        notifier.take_cancellations(),
        vec![NotificationHandle::new("os-8")]
    );
}

#[test]
fn late_handle_for_deleted_task_is_cancelled_not_attached() {
    let notifier = Arc::new(QueuedNotifier::new());
    let mut store = open_with(notifier.clone());

    let id = store.add_task(request("ghost", "2024-01-05", 0)).unwrap();
    let pending = notifier.take_schedule_requests();
    store.delete_task(id).unwrap();
    assert!(notifier.take_cancellations().is_empty());

    assert!(!store.attach_notification(pending[0].ticket, NotificationHandle::new("os-9")));
    assert!(store.task(id).is_none());
    assert_eq!(
        notifier.take_cancellations(),
        vec![NotificationHandle::new("os-9")]
    );
}
