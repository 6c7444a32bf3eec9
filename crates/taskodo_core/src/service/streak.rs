//! Streak derivation for tasks and habits.
//!
//! # Invariants
//! - A streak counts consecutive calendar days ending today or yesterday.
//! - A latest completion older than yesterday means the streak is broken (0).

use crate::model::habit::Habit;
use crate::model::task::Task;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Global task streak: consecutive days with at least one completed task.
pub fn calculate_streak(tasks: &[Task], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = tasks.iter().filter_map(Task::completion_date).collect();
    consecutive_days_ending(&dates, today)
}

/// Counts the run of consecutive days ending at the latest date in `dates`.
///
/// Returns 0 when `dates` is empty or its latest entry is neither `today`
/// nor the day before.
pub fn consecutive_days_ending(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(latest) = dates.iter().next_back().copied() else {
        return 0;
    };
    if latest != today && Some(latest) != today.pred_opt() {
        return 0;
    }

    let mut streak = 0;
    let mut cursor = Some(latest);
    while let Some(day) = cursor {
        if !dates.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// Applies one check-in toggle for `today` and returns the new state.
///
/// Toggling off decrements the streak (floored at 0). Toggling on extends
/// the streak when yesterday is checked in, otherwise restarts it at 1.
/// The update is local and does not rescan history.
pub fn apply_habit_toggle(habit: &mut Habit, today: NaiveDate) -> bool {
    if habit.completed_dates.remove(&today) {
        habit.streak = habit.streak.saturating_sub(1);
        return false;
    }

    habit.completed_dates.insert(today);
    let yesterday_done = today
        .pred_opt()
        .is_some_and(|yesterday| habit.completed_dates.contains(&yesterday));
    habit.streak = if yesterday_done {
        habit.streak.saturating_add(1)
    } else {
        1
    };
    true
}

/// Re-derives a habit streak from its check-in history.
///
/// Returns `true` when the stored streak changed.
pub fn reconcile_habit_streak(habit: &mut Habit, today: NaiveDate) -> bool {
    let derived = consecutive_days_ending(&habit.completed_dates, today);
    if habit.streak == derived {
        return false;
    }
    habit.streak = derived;
    true
}

#[cfg(test)]
mod tests {
    use super::{apply_habit_toggle, consecutive_days_ending, reconcile_habit_streak};
    use crate::model::habit::Habit;
    use chrono::{DateTime, NaiveDate};
    use std::collections::BTreeSet;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn habit() -> Habit {
        Habit::new(
            "Stretch",
            DateTime::parse_from_rfc3339("2024-01-01T07:00:00+00:00").unwrap(),
        )
    }

    #[test]
    fn run_stops_at_first_gap() {
        let dates: BTreeSet<_> = [day(1), day(3), day(4), day(5)].into_iter().collect();
        assert_eq!(consecutive_days_ending(&dates, day(5)), 3);
        assert_eq!(consecutive_days_ending(&dates, day(6)), 3);
        assert_eq!(consecutive_days_ending(&dates, day(7)), 0);
    }

    #[test]
    fn run_across_month_boundary() {
        let dates: BTreeSet<_> = [
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            consecutive_days_ending(&dates, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            3
        );
    }

    #[test]
    fn toggle_on_extends_when_yesterday_done() {
        let mut habit = habit();
        assert!(apply_habit_toggle(&mut habit, day(1)));
        assert_eq!(habit.streak, 1);
        assert!(apply_habit_toggle(&mut habit, day(2)));
        assert_eq!(habit.streak, 2);
    }

    #[test]
    fn toggle_on_after_gap_restarts_at_one() {
        let mut habit = habit();
        apply_habit_toggle(&mut habit, day(1));
        apply_habit_toggle(&mut habit, day(2));
        assert!(apply_habit_toggle(&mut habit, day(5)));
        assert_eq!(habit.streak, 1);
    }

    #[test]
    fn toggle_off_decrements_and_floors_at_zero() {
        let mut habit = habit();
        apply_habit_toggle(&mut habit, day(1));
        assert!(!apply_habit_toggle(&mut habit, day(1)));
        assert_eq!(habit.streak, 0);
        assert!(!habit.is_completed_on(day(1)));

        habit.completed_dates.insert(day(2));
        apply_habit_toggle(&mut habit, day(2));
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn reconcile_fixes_drifted_streak() {
        let mut habit = habit();
        habit.completed_dates = [day(2), day(3)].into_iter().collect();
        habit.streak = 7;

        assert!(reconcile_habit_streak(&mut habit, day(4)));
        assert_eq!(habit.streak, 2);
        assert!(!reconcile_habit_streak(&mut habit, day(4)));
    }
}
