//! Task/habit state container.
//!
//! # Responsibility
//! - Own the authoritative in-memory task and habit collections.
//! - Mediate every mutation and mirror it to key-value storage.
//! - Request reminder scheduling/cancellation from the injected notifier.
//!
//! # Invariants
//! - Tasks are ordered most-recently-added first.
//! - `streak` always equals `calculate_streak(tasks, today)` after a task
//!   mutation.
//! - Storage and notifier failures are logged and swallowed; in-memory state
//!   is never rolled back.
//! - A reminder handle is attached only for the latest ticket of a live task.

use crate::clock::Clock;
use crate::config::StoreConfig;
use crate::model::habit::{Habit, HabitId, HabitValidationError};
use crate::model::task::{
    compute_due_at, Category, Priority, Subtask, SubtaskId, Task, TaskId, TaskValidationError,
};
use crate::model::template::{find_template, ProfileTemplate};
use crate::notify::{NotificationHandle, Notifier, ReminderRequest, ReminderTicket, ScheduleReceipt};
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::snapshot::{self, ProfileRecord};
use crate::service::mood::{evaluate_mood, MoodState, DISMISSED_MESSAGE};
use crate::service::stats::{self, GoalProgress, TaskStats};
use crate::service::streak::{apply_habit_toggle, calculate_streak, reconcile_habit_streak};
use crate::service::suggest::smart_suggestions;
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Store-level errors for operations that can be refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    UnknownTemplate(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTemplate(id) => write!(f, "unknown profile template: `{id}`"),
        }
    }
}

impl Error for StoreError {}

/// Input for `TaskStore::add_task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    pub title: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub category: Category,
    pub remind_after_minutes: u32,
    /// Blank entries are dropped.
    pub subtask_titles: Vec<String>,
}

/// Authoritative task/habit state with persistence and reminder side effects.
pub struct TaskStore<S: KeyValueStore> {
    storage: S,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    config: StoreConfig,
    tasks: Vec<Task>,
    habits: Vec<Habit>,
    streak: u32,
    active_template_id: Option<String>,
    selected_date: NaiveDate,
    mood: MoodState,
    reminder_generations: HashMap<TaskId, u64>,
    next_generation: u64,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Loads persisted state and returns a ready store.
    ///
    /// Records that fail to load are logged and start empty. Habit streaks
    /// are re-derived from their check-in history, and the task streak is
    /// recomputed for the current day.
    pub fn open(
        storage: S,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        config: StoreConfig,
    ) -> Self {
        let today = clock.now().date_naive();

        let tasks = snapshot::load_tasks(&storage).unwrap_or_else(|err| {
            error!("event=store_load module=store status=error record=tasks error={err}");
            Vec::new()
        });
        let mut habits = snapshot::load_habits(&storage).unwrap_or_else(|err| {
            error!("event=store_load module=store status=error record=habits error={err}");
            Vec::new()
        });
        let profile = snapshot::load_profile(&storage).unwrap_or_else(|err| {
            error!("event=store_load module=store status=error record=profile error={err}");
            ProfileRecord::default()
        });

        let reconciled = habits
            .iter_mut()
            .map(|habit| reconcile_habit_streak(habit, today))
            .filter(|changed| *changed)
            .count();
        let streak = calculate_streak(&tasks, today);

        info!(
            "event=store_open module=store status=ok tasks={} habits={} streak={} reconciled_habits={}",
            tasks.len(),
            habits.len(),
            streak,
            reconciled
        );

        let store = Self {
            storage,
            notifier,
            clock,
            config,
            tasks,
            habits,
            streak,
            active_template_id: profile.active_template_id,
            selected_date: today,
            mood: MoodState::default(),
            reminder_generations: HashMap::new(),
            next_generation: 1,
        };
        if reconciled > 0 {
            store.persist_habits();
        }
        store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Current global task streak.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn mood(&self) -> &MoodState {
        &self.mood
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn active_template(&self) -> Option<&'static ProfileTemplate> {
        self.active_template_id.as_deref().and_then(find_template)
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Tasks due on `date`, in list order.
    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.due_date == date).collect()
    }

    /// Releases the underlying storage, e.g. to reopen a fresh store on it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Adds a task at the front of the list.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when the title trims to empty.
    ///   State is left untouched.
    ///
    /// # Side effects
    /// - Requests a reminder when the computed due time is in the future.
    /// - Sets an idle "timer set" mood.
    pub fn add_task(&mut self, request: NewTaskRequest) -> Result<TaskId, TaskValidationError> {
        let title = request.title.trim();
        if title.is_empty() {
            debug!("event=task_add module=store status=rejected reason=empty_title");
            return Err(TaskValidationError::EmptyTitle);
        }

        let now = self.clock.now();
        let due_at = compute_due_at(request.due_date, now, request.remind_after_minutes);
        let mut task = Task::new(title, request.due_date, due_at, now);
        task.priority = request.priority;
        task.category = request.category;
        task.remind_after_minutes = request.remind_after_minutes;
        task.subtasks = request
            .subtask_titles
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(Subtask::new)
            .collect();

        let task_id = task.id;
        let reminder = (due_at > now).then(|| ReminderRequest {
            ticket: self.issue_ticket(task_id),
            title: task.title.clone(),
            fire_at: due_at,
        });

        self.tasks.insert(0, task);
        self.mood = MoodState::timer_set(request.remind_after_minutes);
        info!(
            "event=task_add module=store status=ok task_id={task_id} reminder={}",
            reminder.is_some()
        );
        self.persist_tasks();

        if let Some(reminder) = reminder {
            self.request_reminder(&reminder);
        }
        Ok(task_id)
    }

    /// Flips a task's completion. Returns the new state, or `None` when the
    /// id is unknown.
    pub fn toggle_task(&mut self, task_id: TaskId) -> Option<bool> {
        let now = self.clock.now();
        let task = self.tasks.iter_mut().find(|task| task.id == task_id)?;
        let completed = task.toggle(now);
        if completed {
            self.mood = MoodState::task_done(&task.title);
        }

        self.recompute_streak();
        info!(
            "event=task_toggle module=store status=ok task_id={task_id} completed={completed} streak={}",
            self.streak
        );
        self.persist_tasks();
        Some(completed)
    }

    /// Flips one subtask. Parent completion and streak are unaffected.
    pub fn toggle_subtask(&mut self, task_id: TaskId, subtask_id: SubtaskId) -> bool {
        let toggled = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .is_some_and(|task| task.toggle_subtask(subtask_id));
        if toggled {
            self.persist_tasks();
        }
        toggled
    }

    /// Removes a task and cancels its reminder. Returns the removed task.
    pub fn delete_task(&mut self, task_id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == task_id)?;
        let removed = self.tasks.remove(index);
        self.reminder_generations.remove(&task_id);

        if let Some(handle) = &removed.notification_id {
            self.cancel_reminder(handle);
        }

        self.recompute_streak();
        info!(
            "event=task_delete module=store status=ok task_id={task_id} streak={}",
            self.streak
        );
        self.persist_tasks();
        Some(removed)
    }

    /// Resolves a deferred reminder request.
    ///
    /// Returns `true` when the handle was attached. A ticket for a deleted
    /// task, or one superseded by a newer request, is stale; its handle is
    /// cancelled so the platform does not fire an orphaned reminder.
    pub fn attach_notification(
        &mut self,
        ticket: ReminderTicket,
        handle: NotificationHandle,
    ) -> bool {
        let is_latest =
            self.reminder_generations.get(&ticket.task_id) == Some(&ticket.generation);
        if is_latest {
            if let Some(task) = self.tasks.iter_mut().find(|task| task.id == ticket.task_id) {
                task.notification_id = Some(handle);
                self.reminder_generations.remove(&ticket.task_id);
                debug!(
                    "event=reminder_attach module=store status=ok task_id={} generation={}",
                    ticket.task_id, ticket.generation
                );
                self.persist_tasks();
                return true;
            }
        }

        warn!(
            "event=reminder_attach module=store status=stale task_id={} generation={}",
            ticket.task_id, ticket.generation
        );
        self.cancel_reminder(&handle);
        false
    }

    /// Appends a habit.
    ///
    /// # Errors
    /// - `HabitValidationError::EmptyTitle` when the title trims to empty.
    pub fn add_habit(&mut self, title: &str) -> Result<HabitId, HabitValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(HabitValidationError::EmptyTitle);
        }
        let habit = Habit::new(title, self.clock.now());
        let habit_id = habit.id;
        self.habits.push(habit);
        info!("event=habit_add module=store status=ok habit_id={habit_id}");
        self.persist_habits();
        Ok(habit_id)
    }

    /// Toggles today's check-in for one habit. Returns the new state, or
    /// `None` when the id is unknown.
    pub fn toggle_habit(&mut self, habit_id: HabitId) -> Option<bool> {
        let today = self.clock.now().date_naive();
        let habit = self.habits.iter_mut().find(|habit| habit.id == habit_id)?;
        let done = apply_habit_toggle(habit, today);
        info!(
            "event=habit_toggle module=store status=ok habit_id={habit_id} done={done} streak={}",
            habit.streak
        );
        self.persist_habits();
        Some(done)
    }

    pub fn delete_habit(&mut self, habit_id: HabitId) -> Option<Habit> {
        let index = self.habits.iter().position(|habit| habit.id == habit_id)?;
        let removed = self.habits.remove(index);
        info!("event=habit_delete module=store status=ok habit_id={habit_id}");
        self.persist_habits();
        Some(removed)
    }

    /// Replaces all habits with fresh ones from a template. Tasks are kept.
    ///
    /// # Errors
    /// - `StoreError::UnknownTemplate` when no template has this id.
    pub fn apply_template(&mut self, template_id: &str) -> Result<(), StoreError> {
        let template = find_template(template_id)
            .ok_or_else(|| StoreError::UnknownTemplate(template_id.trim().to_string()))?;

        let now = self.clock.now();
        self.habits = template
            .habits
            .iter()
            .map(|title| Habit::new(*title, now))
            .collect();
        self.active_template_id = Some(template.id.to_string());
        info!(
            "event=template_apply module=store status=ok template_id={} habits={}",
            template.id,
            self.habits.len()
        );
        self.persist_habits();
        self.persist_profile();
        Ok(())
    }

    /// Top-ranked incomplete tasks for the planner.
    pub fn get_smart_suggestions(&self) -> Vec<&Task> {
        smart_suggestions(&self.tasks, self.clock.now(), &self.config)
    }

    /// Re-evaluates mood from task state. Hosts call this every
    /// `StoreConfig::mood_poll_interval_secs`.
    pub fn refresh_mood(&mut self) -> &MoodState {
        if let Some(next) = evaluate_mood(&self.tasks, self.clock.now()) {
            self.mood = next;
        }
        &self.mood
    }

    pub fn dismiss_mascot(&mut self) {
        self.mood = MoodState::idle(DISMISSED_MESSAGE);
    }

    /// Recomputes the task streak for the current day.
    ///
    /// Mutations keep the streak current; hosts call this after a day
    /// rollover so an idle session reports a broken streak.
    pub fn refresh_streak(&mut self) -> u32 {
        self.recompute_streak();
        self.streak
    }

    pub fn stats(&self) -> TaskStats {
        stats::task_stats(&self.tasks, &self.habits, self.streak, &self.config)
    }

    pub fn day_progress(&self, date: NaiveDate) -> stats::DayProgress {
        stats::day_progress(&self.tasks, date)
    }

    pub fn weekly_activity(&self) -> stats::WeeklyActivity {
        stats::weekly_activity(&self.tasks, self.clock.now().date_naive())
    }

    pub fn category_breakdown(&self) -> Vec<stats::CategoryProgress> {
        stats::category_breakdown(&self.tasks)
    }

    pub fn achievements(&self) -> Vec<stats::Achievement> {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        stats::achievements(self.streak, completed)
    }

    pub fn calendar_marks(&self) -> std::collections::BTreeMap<NaiveDate, stats::CalendarMark> {
        stats::calendar_marks(&self.tasks)
    }

    /// Today's completions against the active template's goal.
    pub fn daily_goal_progress(&self) -> Option<GoalProgress> {
        let template = self.active_template()?;
        Some(GoalProgress {
            completed_today: stats::completed_on(&self.tasks, self.clock.now().date_naive()),
            daily_goal: template.daily_goal,
        })
    }

    fn recompute_streak(&mut self) {
        self.streak = calculate_streak(&self.tasks, self.clock.now().date_naive());
    }

    fn issue_ticket(&mut self, task_id: TaskId) -> ReminderTicket {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.reminder_generations.insert(task_id, generation);
        ReminderTicket {
            task_id,
            generation,
        }
    }

    fn request_reminder(&mut self, request: &ReminderRequest) {
        match self.notifier.schedule(request) {
            Ok(ScheduleReceipt::Scheduled(handle)) => {
                self.attach_notification(request.ticket, handle);
            }
            Ok(ScheduleReceipt::Deferred) => {
                debug!(
                    "event=reminder_schedule module=store status=deferred task_id={} generation={}",
                    request.ticket.task_id, request.ticket.generation
                );
            }
            Err(err) => {
                self.reminder_generations.remove(&request.ticket.task_id);
                error!(
                    "event=reminder_schedule module=store status=error task_id={} error={err}",
                    request.ticket.task_id
                );
            }
        }
    }

    fn cancel_reminder(&self, handle: &NotificationHandle) {
        if let Err(err) = self.notifier.cancel(handle) {
            error!("event=reminder_cancel module=store status=error handle={handle} error={err}");
        }
    }

    fn persist_tasks(&self) {
        if let Err(err) = snapshot::save_tasks(&self.storage, &self.tasks) {
            error!("event=persist module=store status=error record=tasks error={err}");
        }
    }

    fn persist_habits(&self) {
        if let Err(err) = snapshot::save_habits(&self.storage, &self.habits) {
            error!("event=persist module=store status=error record=habits error={err}");
        }
    }

    fn persist_profile(&self) {
        let record = ProfileRecord {
            active_template_id: self.active_template_id.clone(),
        };
        if let Err(err) = snapshot::save_profile(&self.storage, &record) {
            error!("event=persist module=store status=error record=profile error={err}");
        }
    }
}
