//! Core domain logic for Taskodo.
//! This crate is the single source of truth for task and habit invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{Habit, HabitId, HabitValidationError};
pub use model::task::{Category, Priority, Subtask, SubtaskId, Task, TaskId, TaskValidationError};
pub use model::template::{find_template, ProfileTemplate, PROFILE_TEMPLATES};
pub use notify::{
    NoopNotifier, NotificationHandle, Notifier, NotifyError, NotifyResult, QueuedNotifier,
    ReminderRequest, ReminderTicket, ScheduleReceipt,
};
pub use repo::kv_repo::{KeyValueStore, SqliteKeyValueStore, StorageError, StorageResult};
pub use service::mood::{MascotMood, MoodState};
pub use service::stats::TaskStats;
pub use service::streak::calculate_streak;
pub use service::task_store::{NewTaskRequest, StoreError, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
