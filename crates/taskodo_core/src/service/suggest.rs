//! Smart suggestion ranking.
//!
//! Scores incomplete tasks by priority, due time and time-of-day fit, then
//! returns the top entries with ties kept in input order.

use crate::config::{StoreConfig, MAX_DUE_SOON_MINUTES};
use crate::model::task::{Category, Priority, Task};
use chrono::{DateTime, Duration, FixedOffset, Timelike};
use std::cmp::Reverse;

const HIGH_PRIORITY_SCORE: i32 = 10;
const MEDIUM_PRIORITY_SCORE: i32 = 5;
const OVERDUE_SCORE: i32 = 20;
const DUE_SOON_SCORE: i32 = 5;
const CONTEXT_SCORE: i32 = 3;

/// Scores one task at `now`.
///
/// The due-soon bonus applies whenever `due_at - now` is below the window,
/// so overdue tasks collect both the overdue and the due-soon bonus.
pub fn score_task(task: &Task, now: DateTime<FixedOffset>, config: &StoreConfig) -> i32 {
    let mut score = match task.priority {
        Priority::High => HIGH_PRIORITY_SCORE,
        Priority::Medium => MEDIUM_PRIORITY_SCORE,
        Priority::Low => 0,
    };

    let until_due = task.due_at.signed_duration_since(now);
    if until_due < Duration::zero() {
        score += OVERDUE_SCORE;
    }
    // Configs built in code skip `validate`, so the window is clamped here.
    let due_soon = Duration::try_minutes(config.due_soon_minutes.clamp(0, MAX_DUE_SOON_MINUTES));
    if due_soon.is_some_and(|window| until_due < window) {
        score += DUE_SOON_SCORE;
    }

    let fits_context = if config.is_work_hour(now.hour()) {
        task.category == Category::Work
    } else {
        matches!(task.category, Category::Personal | Category::Health)
    };
    if fits_context {
        score += CONTEXT_SCORE;
    }

    score
}

/// Returns up to `config.suggestion_limit` incomplete tasks, best first.
pub fn smart_suggestions<'a>(
    tasks: &'a [Task],
    now: DateTime<FixedOffset>,
    config: &StoreConfig,
) -> Vec<&'a Task> {
    let mut scored: Vec<(i32, &Task)> = tasks
        .iter()
        .filter(|task| !task.completed)
        .map(|task| (score_task(task, now, config), task))
        .collect();
    // sort_by_key is stable, which preserves input order among equal scores.
    scored.sort_by_key(|(score, _)| Reverse(*score));
    scored
        .into_iter()
        .take(config.suggestion_limit)
        .map(|(_, task)| task)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{score_task, smart_suggestions};
    use crate::config::StoreConfig;
    use crate::model::task::{Category, Priority, Task};
    use chrono::{DateTime, FixedOffset, NaiveDate};

    fn at(value: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(value).unwrap()
    }

    fn task(title: &str, priority: Priority, category: Category, due_at: &str) -> Task {
        let due_at = at(due_at);
        let mut task = Task::new(
            title,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            due_at,
            at("2024-01-01T08:00:00+00:00"),
        );
        task.priority = priority;
        task.category = category;
        task
    }

    #[test]
    fn overdue_high_work_task_scores_every_bonus_during_work_hours() {
        let config = StoreConfig::default();
        let now = at("2024-01-03T10:00:00+00:00");
        let overdue = task("ship", Priority::High, Category::Work, "2024-01-03T09:00:00+00:00");
        assert_eq!(score_task(&overdue, now, &config), 10 + 20 + 5 + 3);
    }

    #[test]
    fn personal_tasks_get_context_bonus_in_the_evening() {
        let config = StoreConfig::default();
        let now = at("2024-01-03T20:00:00+00:00");
        let later = task("gym", Priority::Low, Category::Health, "2024-01-04T20:00:00+00:00");
        let work = task("deck", Priority::Low, Category::Work, "2024-01-04T20:00:00+00:00");
        assert_eq!(score_task(&later, now, &config), 3);
        assert_eq!(score_task(&work, now, &config), 0);
    }

    #[test]
    fn ties_keep_input_order_and_limit_applies() {
        let config = StoreConfig::default();
        let now = at("2024-01-03T10:00:00+00:00");
        let tasks: Vec<Task> = ["a", "b", "c", "d"]
            .iter()
            .map(|title| task(title, Priority::Low, Category::Finance, "2024-01-05T10:00:00+00:00"))
            .collect();

        let titles: Vec<_> = smart_suggestions(&tasks, now, &config)
            .into_iter()
            .map(|task| task.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn unvalidated_due_soon_window_is_clamped() {
        let now = at("2024-01-03T10:00:00+00:00");
        let next_month = task("far", Priority::Low, Category::Finance, "2024-02-03T10:00:00+00:00");
        let tomorrow = task("near", Priority::Low, Category::Finance, "2024-01-04T10:00:00+00:00");

        let huge = StoreConfig {
            due_soon_minutes: i64::MAX,
            ..StoreConfig::default()
        };
        assert_eq!(score_task(&next_month, now, &huge), 0);
        assert_eq!(score_task(&tomorrow, now, &huge), 5);

        let negative = StoreConfig {
            due_soon_minutes: i64::MIN,
            ..StoreConfig::default()
        };
        assert_eq!(score_task(&tomorrow, now, &negative), 0);
    }

    #[test]
    fn completed_tasks_are_never_suggested() {
        let config = StoreConfig::default();
        let now = at("2024-01-03T10:00:00+00:00");
        let mut done = task("done", Priority::High, Category::Work, "2024-01-03T09:00:00+00:00");
        done.set_completed(true, now);
        assert!(smart_suggestions(&[done], now, &config).is_empty());
    }
}
