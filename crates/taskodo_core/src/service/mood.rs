//! Mascot mood feedback.
//!
//! Mood is presentation metadata derived from task state. It is never
//! persisted and never affects business state.

use crate::model::task::Task;
use chrono::{DateTime, FixedOffset};

pub const DEFAULT_MESSAGE: &str = "Stay focused. Your plan is waiting.";
pub const DISMISSED_MESSAGE: &str = "Back to focus mode.";
pub const ALL_DONE_MESSAGE: &str = "All tasks complete. Great execution.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MascotMood {
    Idle,
    Nudge,
    Celebrate,
}

impl MascotMood {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Nudge => "nudge",
            Self::Celebrate => "celebrate",
        }
    }
}

/// Current mood plus the line the mascot says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodState {
    pub mood: MascotMood,
    pub message: String,
}

impl MoodState {
    pub fn new(mood: MascotMood, message: impl Into<String>) -> Self {
        Self {
            mood,
            message: message.into(),
        }
    }

    pub fn idle(message: impl Into<String>) -> Self {
        Self::new(MascotMood::Idle, message)
    }

    pub fn timer_set(remind_after_minutes: u32) -> Self {
        Self::idle(format!("Timer set for {remind_after_minutes} min."))
    }

    pub fn task_done(title: &str) -> Self {
        Self::new(MascotMood::Celebrate, format!("Excellent. \"{title}\" is done."))
    }
}

impl Default for MoodState {
    fn default() -> Self {
        Self::idle(DEFAULT_MESSAGE)
    }
}

/// Periodic mood evaluation.
///
/// Returns `None` when the current mood should be kept. An overdue task
/// takes precedence over the all-complete celebration.
pub fn evaluate_mood(tasks: &[Task], now: DateTime<FixedOffset>) -> Option<MoodState> {
    if let Some(overdue) = tasks.iter().find(|task| task.is_overdue(now)) {
        return Some(MoodState::new(
            MascotMood::Nudge,
            format!("\"{}\" is overdue. Finish it now.", overdue.title),
        ));
    }
    if !tasks.is_empty() && tasks.iter().all(|task| task.completed) {
        return Some(MoodState::new(MascotMood::Celebrate, ALL_DONE_MESSAGE));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{evaluate_mood, MascotMood};
    use crate::model::task::Task;
    use chrono::{DateTime, FixedOffset, NaiveDate};

    fn at(value: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(value).unwrap()
    }

    fn task(title: &str, due_at: &str) -> Task {
        Task::new(
            title,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            at(due_at),
            at("2024-01-01T08:00:00+00:00"),
        )
    }

    #[test]
    fn overdue_task_nudges() {
        let now = at("2024-01-01T12:00:00+00:00");
        let tasks = vec![
            task("later", "2024-01-01T15:00:00+00:00"),
            task("late", "2024-01-01T11:00:00+00:00"),
        ];
        let state = evaluate_mood(&tasks, now).unwrap();
        assert_eq!(state.mood, MascotMood::Nudge);
        assert_eq!(state.message, "\"late\" is overdue. Finish it now.");
    }

    #[test]
    fn all_done_celebrates_and_empty_list_keeps_mood() {
        let now = at("2024-01-01T12:00:00+00:00");
        let mut done = task("done", "2024-01-01T11:00:00+00:00");
        done.set_completed(true, now);

        assert_eq!(
            evaluate_mood(&[done], now).map(|state| state.mood),
            Some(MascotMood::Celebrate)
        );
        assert_eq!(evaluate_mood(&[], now), None);
    }
}
