//! Task domain model.
//!
//! # Responsibility
//! - Define the task record rendered by the agenda, calendar and stats views.
//! - Keep completion bookkeeping (`completed` / `completed_at`) consistent.
//!
//! # Invariants
//! - `title` is non-empty after trimming.
//! - `completed_at` is `Some` exactly when `completed` is true.
//! - Subtask ids are unique within one task.

use crate::notify::NotificationHandle;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Identifier for a subtask, unique within its parent task.
pub type SubtaskId = Uuid;

/// Task urgency used for suggestion ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses a priority label, case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Closed set of task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Health,
    Learning,
    Finance,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Self::Work,
        Self::Personal,
        Self::Health,
        Self::Learning,
        Self::Finance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Learning => "Learning",
            Self::Finance => "Finance",
        }
    }

    /// Parses a category label, case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(normalized))
    }
}

/// Checklist item nested under a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Calendar day the task belongs to.
    pub due_date: NaiveDate,
    /// Moment the reminder fires and after which the task counts as overdue.
    pub due_at: DateTime<FixedOffset>,
    /// Reminder offset as entered by the user.
    #[serde(default)]
    pub remind_after_minutes: u32,
    pub priority: Priority,
    pub category: Category,
    pub completed: bool,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    /// Handle returned by the external notification scheduler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<NotificationHandle>,
}

impl Task {
    /// Creates an incomplete task with a generated id.
    ///
    /// Priority defaults to `Medium` and category to `Personal`; callers set
    /// the real values before insertion.
    pub fn new(
        title: impl Into<String>,
        due_date: NaiveDate,
        due_at: DateTime<FixedOffset>,
        created_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            due_date,
            due_at,
            remind_after_minutes: 0,
            priority: Priority::Medium,
            category: Category::Personal,
            completed: false,
            created_at,
            completed_at: None,
            subtasks: Vec::new(),
            notification_id: None,
        }
    }

    /// Sets completion state and keeps `completed_at` in sync.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<FixedOffset>) {
        self.completed = completed;
        self.completed_at = if completed { Some(now) } else { None };
    }

    /// Flips completion and returns the new state.
    pub fn toggle(&mut self, now: DateTime<FixedOffset>) -> bool {
        let next = !self.completed;
        self.set_completed(next, now);
        next
    }

    /// Flips one subtask. Returns `false` when the id is unknown.
    pub fn toggle_subtask(&mut self, subtask_id: SubtaskId) -> bool {
        match self
            .subtasks
            .iter_mut()
            .find(|subtask| subtask.id == subtask_id)
        {
            Some(subtask) => {
                subtask.completed = !subtask.completed;
                true
            }
            None => false,
        }
    }

    /// Calendar day of completion, in the offset captured at completion time.
    pub fn completion_date(&self) -> Option<NaiveDate> {
        if !self.completed {
            return None;
        }
        self.completed_at.map(|at| at.date_naive())
    }

    pub fn is_overdue(&self, now: DateTime<FixedOffset>) -> bool {
        !self.completed && self.due_at <= now
    }

    pub fn completed_subtask_count(&self) -> usize {
        self.subtasks
            .iter()
            .filter(|subtask| subtask.completed)
            .count()
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.completed != self.completed_at.is_some() {
            return Err(TaskValidationError::CompletionMismatch(self.id));
        }

        let mut seen = HashSet::with_capacity(self.subtasks.len());
        for subtask in &self.subtasks {
            if subtask.title.trim().is_empty() {
                return Err(TaskValidationError::EmptySubtaskTitle);
            }
            if !seen.insert(subtask.id) {
                return Err(TaskValidationError::DuplicateSubtaskId(subtask.id));
            }
        }
        Ok(())
    }
}

/// Computes the reminder moment for a new task.
///
/// The result is `due_date` at the current hour and minute (seconds zeroed),
/// shifted by `remind_after_minutes`, in the offset of `now`.
pub fn compute_due_at(
    due_date: NaiveDate,
    now: DateTime<FixedOffset>,
    remind_after_minutes: u32,
) -> DateTime<FixedOffset> {
    let time_of_day = now
        .time()
        .with_second(0)
        .and_then(|time| time.with_nanosecond(0))
        .unwrap_or_else(|| now.time());
    let local =
        due_date.and_time(time_of_day) + Duration::minutes(i64::from(remind_after_minutes));
    now.offset().from_local_datetime(&local).single().unwrap_or(now)
}

/// Validation errors for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    EmptySubtaskTitle,
    DuplicateSubtaskId(SubtaskId),
    CompletionMismatch(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::EmptySubtaskTitle => write!(f, "subtask title cannot be empty"),
            Self::DuplicateSubtaskId(id) => write!(f, "duplicate subtask id: {id}"),
            Self::CompletionMismatch(id) => {
                write!(f, "task {id} has completed/completed_at out of sync")
            }
        }
    }
}

impl Error for TaskValidationError {}
