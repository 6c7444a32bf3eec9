//! Derived statistics for the dashboard, calendar and analytics views.
//!
//! Every function here is a pure projection over task/habit slices; nothing
//! is cached or persisted.

use crate::config::StoreConfig;
use crate::model::habit::Habit;
use crate::model::task::{Category, Task};
use chrono::NaiveDate;
use std::collections::BTreeMap;

const WEEK_DAYS: u64 = 7;
/// The first three days of the week window form the trend baseline.
const TREND_BASELINE_DAYS: usize = 3;

/// Headline numbers for the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub active_habits: usize,
    /// `completed / total`, 0 when there are no tasks.
    pub completion_rate: f64,
    pub xp: u32,
    /// 1-based level.
    pub level: u32,
    /// XP earned inside the current level.
    pub level_progress: u32,
    pub streak: u32,
}

/// XP earned from completed work and habit check-ins.
pub fn total_xp(tasks: &[Task], habits: &[Habit], config: &StoreConfig) -> u32 {
    let task_xp = tasks.iter().fold(0u32, |acc, task| {
        let subtasks =
            count_u32(task.completed_subtask_count()).saturating_mul(config.xp_per_subtask);
        let completion = if task.completed {
            config.xp_per_task
        } else {
            0
        };
        acc.saturating_add(completion).saturating_add(subtasks)
    });
    let habit_xp = habits.iter().fold(0u32, |acc, habit| {
        acc.saturating_add(
            count_u32(habit.completed_dates.len()).saturating_mul(config.xp_per_habit_check_in),
        )
    });
    task_xp.saturating_add(habit_xp)
}

pub fn task_stats(tasks: &[Task], habits: &[Habit], streak: u32, config: &StoreConfig) -> TaskStats {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|task| task.completed).count();
    let xp = total_xp(tasks, habits, config);
    // StoreConfig::validate guarantees a positive level size.
    let per_level = config.xp_per_level.max(1);

    TaskStats {
        total_tasks,
        completed_tasks,
        active_habits: habits.len(),
        completion_rate: ratio(completed_tasks, total_tasks),
        xp,
        level: xp / per_level + 1,
        level_progress: xp % per_level,
        streak,
    }
}

/// Completion progress for the tasks due on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayProgress {
    pub date: NaiveDate,
    pub total: usize,
    pub completed: usize,
    pub percent: f64,
}

pub fn day_progress(tasks: &[Task], date: NaiveDate) -> DayProgress {
    let (total, completed) = tasks
        .iter()
        .filter(|task| task.due_date == date)
        .fold((0, 0), |(total, done), task| {
            (total + 1, done + usize::from(task.completed))
        });
    DayProgress {
        date,
        total,
        completed,
        percent: ratio(completed, total),
    }
}

/// Completed-task count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyActivity {
    /// Seven entries, oldest first, ending today.
    pub days: Vec<DailyCount>,
    /// Percent change of the last four days against the first three.
    pub trend_percent: f64,
}

impl WeeklyActivity {
    /// Busiest day count in the window.
    pub fn peak(&self) -> usize {
        self.days.iter().map(|day| day.completed).max().unwrap_or(0)
    }
}

pub fn weekly_activity(tasks: &[Task], today: NaiveDate) -> WeeklyActivity {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in tasks.iter().filter_map(Task::completion_date) {
        *per_day.entry(date).or_insert(0) += 1;
    }

    let days: Vec<DailyCount> = (0..WEEK_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(chrono::Days::new(offset)))
        .map(|date| DailyCount {
            date,
            completed: per_day.get(&date).copied().unwrap_or(0),
        })
        .collect();

    let split = TREND_BASELINE_DAYS.min(days.len());
    let baseline: usize = days[..split].iter().map(|day| day.completed).sum();
    let recent: usize = days[split..].iter().map(|day| day.completed).sum();
    let trend_percent = if baseline > 0 {
        (recent as f64 - baseline as f64) / baseline as f64 * 100.0
    } else {
        0.0
    };

    WeeklyActivity {
        days,
        trend_percent,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProgress {
    pub category: Category,
    pub total: usize,
    pub completed: usize,
    pub ratio: f64,
}

/// Per-category progress, skipping categories without tasks.
pub fn category_breakdown(tasks: &[Task]) -> Vec<CategoryProgress> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let (total, completed) = tasks
                .iter()
                .filter(|task| task.category == category)
                .fold((0, 0), |(total, done), task| {
                    (total + 1, done + usize::from(task.completed))
                });
            (total > 0).then(|| CategoryProgress {
                category,
                total,
                completed,
                ratio: ratio(completed, total),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    /// Three-day streak.
    OnFire,
    /// Ten completed tasks.
    TaskMaster,
    /// Fifty completed tasks.
    Legend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub unlocked: bool,
}

pub fn achievements(streak: u32, completed_tasks: usize) -> Vec<Achievement> {
    vec![
        Achievement {
            kind: AchievementKind::OnFire,
            unlocked: streak >= 3,
        },
        Achievement {
            kind: AchievementKind::TaskMaster,
            unlocked: completed_tasks >= 10,
        },
        Achievement {
            kind: AchievementKind::Legend,
            unlocked: completed_tasks >= 50,
        },
    ]
}

/// Task count per due date, for calendar dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMark {
    pub task_count: usize,
    pub completed_count: usize,
}

impl CalendarMark {
    pub fn all_done(&self) -> bool {
        self.task_count > 0 && self.completed_count == self.task_count
    }
}

pub fn calendar_marks(tasks: &[Task]) -> BTreeMap<NaiveDate, CalendarMark> {
    let mut marks: BTreeMap<NaiveDate, CalendarMark> = BTreeMap::new();
    for task in tasks {
        let mark = marks.entry(task.due_date).or_insert(CalendarMark {
            task_count: 0,
            completed_count: 0,
        });
        mark.task_count += 1;
        mark.completed_count += usize::from(task.completed);
    }
    marks
}

/// Progress toward a template's daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProgress {
    pub completed_today: usize,
    pub daily_goal: u32,
}

impl GoalProgress {
    pub fn is_met(&self) -> bool {
        self.completed_today >= self.daily_goal as usize
    }
}

pub fn completed_on(tasks: &[Task], date: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|task| task.completion_date() == Some(date))
        .count()
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
