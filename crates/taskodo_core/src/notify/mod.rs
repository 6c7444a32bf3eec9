//! Reminder scheduling contract.
//!
//! # Responsibility
//! - Describe the external notification scheduler the store calls into.
//! - Carry reminder tickets so late-resolving schedule calls can be matched
//!   back to the task that requested them.
//!
//! # Invariants
//! - Notifier failures never propagate to store callers.
//! - Each schedule request carries a ticket whose generation is unique for
//!   the lifetime of one store.

mod queued;

pub use queued::QueuedNotifier;

use crate::model::task::TaskId;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Notification title shown for every task reminder.
pub const REMINDER_TITLE: &str = "Task Reminder 🔔";

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Opaque id returned by the platform scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationHandle(String);

impl NotificationHandle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for NotificationHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one schedule request for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReminderTicket {
    pub task_id: TaskId,
    pub generation: u64,
}

/// Request handed to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub ticket: ReminderTicket,
    /// Task title, used for the notification body.
    pub title: String,
    pub fire_at: DateTime<FixedOffset>,
}

impl ReminderRequest {
    pub fn task_id(&self) -> TaskId {
        self.ticket.task_id
    }

    /// Notification body text.
    pub fn body(&self) -> String {
        format!("It's time for: {}", self.title)
    }
}

/// Outcome of a schedule call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleReceipt {
    /// The scheduler produced a handle synchronously.
    Scheduled(NotificationHandle),
    /// The handle will arrive later through `TaskStore::attach_notification`.
    Deferred,
}

/// External notification scheduler.
pub trait Notifier: Send + Sync {
    fn schedule(&self, request: &ReminderRequest) -> NotifyResult<ScheduleReceipt>;
    fn cancel(&self, handle: &NotificationHandle) -> NotifyResult<()>;
}

/// Notifier that schedules nothing. Used when reminders are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn schedule(&self, _request: &ReminderRequest) -> NotifyResult<ScheduleReceipt> {
        Ok(ScheduleReceipt::Deferred)
    }

    fn cancel(&self, _handle: &NotificationHandle) -> NotifyResult<()> {
        Ok(())
    }
}

/// Scheduler failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The platform denied notification permission.
    PermissionDenied,
    /// The requested fire time was rejected.
    InvalidDate(String),
    Backend(String),
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "notification permission denied"),
            Self::InvalidDate(value) => write!(f, "invalid reminder date: {value}"),
            Self::Backend(message) => write!(f, "notification backend error: {message}"),
        }
    }
}

impl Error for NotifyError {}
