//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Wrap one `TaskStore` per opaque `TaskodoSession` owned by the host.
//! - Relay reminder requests to the host scheduler through a queue.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Ids, dates and timestamps cross the boundary as strings
//!   (UUID, `YYYY-MM-DD`, RFC 3339).
//! - All store access for a session is serialized by its mutex.

use chrono::{DateTime, FixedOffset, NaiveDate};
use log::info;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use taskodo_core::notify::REMINDER_TITLE;
use taskodo_core::service::stats::AchievementKind;
use taskodo_core::{
    core_version as core_version_inner, find_template, init_logging as init_logging_inner,
    ping as ping_inner, Category, Clock, Habit, MoodState, NewTaskRequest, NotificationHandle,
    Priority, QueuedNotifier, ReminderRequest, ReminderTicket, SqliteKeyValueStore, StoreConfig,
    SystemClock, Task, TaskStore, PROFILE_TEMPLATES,
};
use uuid::Uuid;

const STORE_DB_FILE_NAME: &str = "taskodo.sqlite3";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Id of the affected record, when there is one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskView {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD`.
    pub due_date: String,
    /// RFC 3339 reminder instant.
    pub due_at: String,
    pub remind_after_minutes: u32,
    /// `low|medium|high`.
    pub priority: String,
    /// `work|personal|health|learning|finance`.
    pub category: String,
    pub completed: bool,
    pub overdue: bool,
    pub created_at: String,
    pub completed_at: Option<String>,
    pub has_reminder: bool,
    pub subtasks: Vec<SubtaskView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitView {
    pub id: String,
    pub title: String,
    pub streak: u32,
    pub completed_today: bool,
    /// Check-in days, oldest first.
    pub completed_dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateView {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub color: String,
    pub habits: Vec<String>,
    pub categories: Vec<String>,
    pub daily_goal: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub active_habits: u32,
    /// Percentage in `0..=100`.
    pub completion_rate: f64,
    pub xp: u32,
    pub level: u32,
    pub level_progress: u32,
    pub streak: u32,
    pub today_total: u32,
    pub today_completed: u32,
    /// Present when a profile template is active.
    pub daily_goal: Option<u32>,
    pub daily_goal_met: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyCountView {
    pub date: String,
    pub completed: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProgressView {
    pub category: String,
    pub total: u32,
    pub completed: u32,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementView {
    /// `on_fire|task_master|legend`.
    pub kind: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMarkView {
    pub date: String,
    pub task_count: u32,
    pub completed_count: u32,
    pub all_done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightsView {
    /// Last seven days, oldest first.
    pub weekly: Vec<DailyCountView>,
    pub weekly_peak: u32,
    pub trend_percent: f64,
    pub categories: Vec<CategoryProgressView>,
    pub achievements: Vec<AchievementView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodView {
    /// `idle|nudge|celebrate`.
    pub mood: String,
    pub message: String,
}

/// Reminder the host must schedule, then report back through
/// `TaskodoSession::reminder_attach`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequestView {
    pub task_id: String,
    pub generation: u64,
    pub title: String,
    pub body: String,
    /// RFC 3339 fire instant.
    pub fire_at: String,
}

/// Response envelope for `open_session`.
pub struct SessionOpenResponse {
    pub ok: bool,
    /// Present iff `ok`.
    pub session: Option<TaskodoSession>,
    /// Resolved database path.
    pub db_path: String,
    pub message: String,
}

/// One open task store. The host keeps it for the app lifetime and drops it
/// to close the database.
#[flutter_rust_bridge::frb(opaque)]
pub struct TaskodoSession {
    store: Mutex<TaskStore<SqliteKeyValueStore>>,
    notifier: Arc<QueuedNotifier>,
}

/// Opens a task store session.
///
/// Input semantics:
/// - `db_path`: SQLite file path. `None` or blank falls back to
///   `TASKODO_DB_PATH`, then to a file in the system temp directory.
/// - `config_json`: optional `StoreConfig` JSON; missing fields use defaults.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn open_session(db_path: Option<String>, config_json: Option<String>) -> SessionOpenResponse {
    let path = db_path
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(resolve_default_db_path);
    let display = path.display().to_string();

    let config = match config_json.as_deref().map(StoreConfig::from_json_str) {
        Some(Ok(config)) => config,
        Some(Err(err)) => return open_failure(display, format!("open_session failed: {err}")),
        None => StoreConfig::default(),
    };
    let storage = match SqliteKeyValueStore::open(&path) {
        Ok(storage) => storage,
        Err(err) => return open_failure(display, format!("open_session failed: {err}")),
    };

    let notifier = Arc::new(QueuedNotifier::new());
    let store = TaskStore::open(storage, notifier.clone(), Arc::new(SystemClock), config);
    info!(
        "event=ffi_session_open module=ffi status=ok tasks={} habits={}",
        store.tasks().len(),
        store.habits().len()
    );
    SessionOpenResponse {
        ok: true,
        session: Some(TaskodoSession {
            store: Mutex::new(store),
            notifier,
        }),
        db_path: display,
        message: "Session opened.".to_string(),
    }
}

/// Lists the built-in profile templates. None is flagged active; use
/// `TaskodoSession::template_list` for that.
#[flutter_rust_bridge::frb(sync)]
pub fn template_catalog() -> Vec<TemplateView> {
    template_views(None)
}

impl TaskodoSession {
    /// Suggested mood polling interval for the host timer.
    #[flutter_rust_bridge::frb(sync)]
    pub fn mood_poll_interval_secs(&self) -> u64 {
        self.store().config().mood_poll_interval_secs
    }

    /// Lists all tasks, most recently added first.
    #[flutter_rust_bridge::frb(sync)]
    pub fn task_list(&self) -> Vec<TaskView> {
        let now = SystemClock.now();
        self.store()
            .tasks()
            .iter()
            .map(|task| to_task_view(task, now))
            .collect()
    }

    /// Lists tasks due on `date` (`YYYY-MM-DD`). Invalid dates yield no tasks.
    #[flutter_rust_bridge::frb(sync)]
    pub fn task_list_for_date(&self, date: String) -> Vec<TaskView> {
        let Ok(date) = parse_date(&date) else {
            return Vec::new();
        };
        let now = SystemClock.now();
        self.store()
            .tasks_for_date(date)
            .into_iter()
            .map(|task| to_task_view(task, now))
            .collect()
    }

    /// Top-ranked incomplete tasks for the planner view.
    #[flutter_rust_bridge::frb(sync)]
    pub fn task_suggestions(&self) -> Vec<TaskView> {
        let now = SystemClock.now();
        self.store()
            .get_smart_suggestions()
            .into_iter()
            .map(|task| to_task_view(task, now))
            .collect()
    }

    /// Creates a task.
    ///
    /// Input semantics:
    /// - `due_date`: `YYYY-MM-DD`.
    /// - `priority`: `low|medium|high`; `category`: a category label.
    /// - `subtasks`: checklist titles; blank entries are dropped.
    ///
    /// # FFI contract
    /// - Never panics.
    /// - Returns the created task id on success.
    #[flutter_rust_bridge::frb(sync)]
    pub fn task_add(
        &self,
        title: String,
        due_date: String,
        priority: String,
        category: String,
        remind_after_minutes: u32,
        subtasks: Vec<String>,
    ) -> ActionResponse {
        let request = match build_task_request(
            title,
            &due_date,
            &priority,
            &category,
            remind_after_minutes,
            subtasks,
        ) {
            Ok(request) => request,
            Err(err) => return ActionResponse::failure(format!("task_add failed: {err}")),
        };
        match self.store().add_task(request) {
            Ok(task_id) => ActionResponse::success("Task created.", Some(task_id.to_string())),
            Err(err) => ActionResponse::failure(format!("task_add failed: {err}")),
        }
    }

    /// Flips a task's completion state.
    #[flutter_rust_bridge::frb(sync)]
    pub fn task_toggle(&self, task_id: String) -> ActionResponse {
        let id = match parse_id(&task_id) {
            Ok(id) => id,
            Err(err) => return ActionResponse::failure(format!("task_toggle failed: {err}")),
        };
        match self.store().toggle_task(id) {
            Some(true) => ActionResponse::success("Task completed.", Some(task_id)),
            Some(false) => ActionResponse::success("Task reopened.", Some(task_id)),
            None => ActionResponse::failure("task_toggle failed: task not found"),
        }
    }

    /// Flips one subtask of a task.
    #[flutter_rust_bridge::frb(sync)]
    pub fn subtask_toggle(&self, task_id: String, subtask_id: String) -> ActionResponse {
        let ids = parse_id(&task_id).and_then(|task| Ok((task, parse_id(&subtask_id)?)));
        let (task, subtask) = match ids {
            Ok(ids) => ids,
            Err(err) => return ActionResponse::failure(format!("subtask_toggle failed: {err}")),
        };
        if self.store().toggle_subtask(task, subtask) {
            ActionResponse::success("Subtask toggled.", Some(subtask_id))
        } else {
            ActionResponse::failure("subtask_toggle failed: subtask not found")
        }
    }

    /// Deletes a task and queues cancellation of its reminder.
    #[flutter_rust_bridge::frb(sync)]
    pub fn task_delete(&self, task_id: String) -> ActionResponse {
        let id = match parse_id(&task_id) {
            Ok(id) => id,
            Err(err) => return ActionResponse::failure(format!("task_delete failed: {err}")),
        };
        match self.store().delete_task(id) {
            Some(_) => ActionResponse::success("Task deleted.", Some(task_id)),
            None => ActionResponse::failure("task_delete failed: task not found"),
        }
    }

    /// Stores the planner's selected day (`YYYY-MM-DD`).
    #[flutter_rust_bridge::frb(sync)]
    pub fn planner_select_date(&self, date: String) -> ActionResponse {
        match parse_date(&date) {
            Ok(parsed) => {
                self.store().set_selected_date(parsed);
                ActionResponse::success("Date selected.", Some(format_date(parsed)))
            }
            Err(err) => ActionResponse::failure(format!("planner_select_date failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn planner_selected_date(&self) -> String {
        format_date(self.store().selected_date())
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn habit_list(&self) -> Vec<HabitView> {
        let today = SystemClock.now().date_naive();
        self.store()
            .habits()
            .iter()
            .map(|habit| to_habit_view(habit, today))
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn habit_add(&self, title: String) -> ActionResponse {
        match self.store().add_habit(&title) {
            Ok(habit_id) => ActionResponse::success("Habit created.", Some(habit_id.to_string())),
            Err(err) => ActionResponse::failure(format!("habit_add failed: {err}")),
        }
    }

    /// Toggles today's check-in for a habit.
    #[flutter_rust_bridge::frb(sync)]
    pub fn habit_toggle(&self, habit_id: String) -> ActionResponse {
        let id = match parse_id(&habit_id) {
            Ok(id) => id,
            Err(err) => return ActionResponse::failure(format!("habit_toggle failed: {err}")),
        };
        match self.store().toggle_habit(id) {
            Some(true) => ActionResponse::success("Habit checked in.", Some(habit_id)),
            Some(false) => ActionResponse::success("Habit check-in removed.", Some(habit_id)),
            None => ActionResponse::failure("habit_toggle failed: habit not found"),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn habit_delete(&self, habit_id: String) -> ActionResponse {
        let id = match parse_id(&habit_id) {
            Ok(id) => id,
            Err(err) => return ActionResponse::failure(format!("habit_delete failed: {err}")),
        };
        match self.store().delete_habit(id) {
            Some(_) => ActionResponse::success("Habit deleted.", Some(habit_id)),
            None => ActionResponse::failure("habit_delete failed: habit not found"),
        }
    }

    /// Lists the built-in profile templates, flagging the active one.
    #[flutter_rust_bridge::frb(sync)]
    pub fn template_list(&self) -> Vec<TemplateView> {
        let active = self.store().active_template().map(|template| template.id);
        template_views(active)
    }

    /// Replaces all habits with the template's habits.
    #[flutter_rust_bridge::frb(sync)]
    pub fn template_apply(&self, template_id: String) -> ActionResponse {
        match self.store().apply_template(&template_id) {
            Ok(()) => {
                let id = find_template(&template_id).map(|template| template.id.to_string());
                ActionResponse::success("Template applied.", id)
            }
            Err(err) => ActionResponse::failure(format!("template_apply failed: {err}")),
        }
    }

    /// Aggregate counters for the stats screen. The streak is refreshed
    /// first so a day rollover is reflected.
    #[flutter_rust_bridge::frb(sync)]
    pub fn stats(&self) -> StatsView {
        let mut store = self.store();
        store.refresh_streak();
        let stats = store.stats();
        let today = store.day_progress(SystemClock.now().date_naive());
        let goal = store.daily_goal_progress();
        StatsView {
            total_tasks: count(stats.total_tasks),
            completed_tasks: count(stats.completed_tasks),
            active_habits: count(stats.active_habits),
            completion_rate: stats.completion_rate * 100.0,
            xp: stats.xp,
            level: stats.level,
            level_progress: stats.level_progress,
            streak: stats.streak,
            today_total: count(today.total),
            today_completed: count(today.completed),
            daily_goal: goal.map(|goal| goal.daily_goal),
            daily_goal_met: goal.is_some_and(|goal| goal.is_met()),
        }
    }

    /// Weekly activity, category progress and achievements.
    #[flutter_rust_bridge::frb(sync)]
    pub fn insights(&self) -> InsightsView {
        let store = self.store();
        let weekly = store.weekly_activity();
        InsightsView {
            weekly_peak: count(weekly.peak()),
            trend_percent: weekly.trend_percent,
            weekly: weekly
                .days
                .iter()
                .map(|day| DailyCountView {
                    date: format_date(day.date),
                    completed: count(day.completed),
                })
                .collect(),
            categories: store
                .category_breakdown()
                .into_iter()
                .map(|entry| CategoryProgressView {
                    category: category_label(entry.category),
                    total: count(entry.total),
                    completed: count(entry.completed),
                    ratio: entry.ratio,
                })
                .collect(),
            achievements: store
                .achievements()
                .into_iter()
                .map(|achievement| AchievementView {
                    kind: achievement_label(achievement.kind).to_string(),
                    unlocked: achievement.unlocked,
                })
                .collect(),
        }
    }

    /// Per-day task markers for the calendar view, ordered by date.
    #[flutter_rust_bridge::frb(sync)]
    pub fn calendar_marks(&self) -> Vec<CalendarMarkView> {
        self.store()
            .calendar_marks()
            .into_iter()
            .map(|(date, mark)| CalendarMarkView {
                date: format_date(date),
                task_count: count(mark.task_count),
                completed_count: count(mark.completed_count),
                all_done: mark.all_done(),
            })
            .collect()
    }

    /// Current mascot mood without re-evaluation.
    #[flutter_rust_bridge::frb(sync)]
    pub fn mood_current(&self) -> MoodView {
        to_mood_view(self.store().mood())
    }

    /// Re-evaluates the mascot mood. Hosts call this on their poll timer.
    #[flutter_rust_bridge::frb(sync)]
    pub fn mood_refresh(&self) -> MoodView {
        to_mood_view(self.store().refresh_mood())
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn mascot_dismiss(&self) -> MoodView {
        let mut store = self.store();
        store.dismiss_mascot();
        to_mood_view(store.mood())
    }

    /// Drains reminders the host must schedule.
    ///
    /// # FFI contract
    /// - Each request is returned once.
    /// - The host reports each resulting handle through `reminder_attach`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn reminder_take_pending(&self) -> Vec<ReminderRequestView> {
        self.notifier
            .take_schedule_requests()
            .iter()
            .map(to_reminder_view)
            .collect()
    }

    /// Drains notification handles the host must cancel.
    #[flutter_rust_bridge::frb(sync)]
    pub fn reminder_take_cancellations(&self) -> Vec<String> {
        self.notifier
            .take_cancellations()
            .into_iter()
            .map(|handle| handle.as_str().to_string())
            .collect()
    }

    /// Reports the platform handle for a previously drained reminder.
    ///
    /// # FFI contract
    /// - `ok=false` when the ticket is stale, for example because the task
    ///   was deleted meanwhile. The handle is then queued for cancellation.
    #[flutter_rust_bridge::frb(sync)]
    pub fn reminder_attach(&self, task_id: String, generation: u64, handle: String) -> ActionResponse {
        let id = match parse_id(&task_id) {
            Ok(id) => id,
            Err(err) => return ActionResponse::failure(format!("reminder_attach failed: {err}")),
        };
        let ticket = ReminderTicket {
            task_id: id,
            generation,
        };
        if self
            .store()
            .attach_notification(ticket, NotificationHandle::new(handle.trim()))
        {
            ActionResponse::success("Reminder attached.", Some(task_id))
        } else {
            ActionResponse::failure("reminder_attach failed: stale reminder ticket")
        }
    }

    fn store(&self) -> MutexGuard<'_, TaskStore<SqliteKeyValueStore>> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn open_failure(db_path: String, message: String) -> SessionOpenResponse {
    SessionOpenResponse {
        ok: false,
        session: None,
        db_path,
        message,
    }
}

fn resolve_default_db_path() -> PathBuf {
    if let Ok(raw) = std::env::var("TASKODO_DB_PATH") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(STORE_DB_FILE_NAME)
}

fn build_task_request(
    title: String,
    due_date: &str,
    priority: &str,
    category: &str,
    remind_after_minutes: u32,
    subtask_titles: Vec<String>,
) -> Result<NewTaskRequest, String> {
    let priority =
        Priority::parse(priority).ok_or_else(|| format!("unknown priority `{priority}`"))?;
    let category =
        Category::parse(category).ok_or_else(|| format!("unknown category `{category}`"))?;
    Ok(NewTaskRequest {
        title,
        due_date: parse_date(due_date)?,
        priority,
        category,
        remind_after_minutes,
        subtask_titles,
    })
}

fn parse_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid id `{raw}`: {err}"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|err| format!("invalid date `{raw}`: {err}"))
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Lowercase wire label, e.g. `high`.
fn priority_label(priority: Priority) -> String {
    priority.as_str().to_ascii_lowercase()
}

/// Lowercase wire label, e.g. `work`.
fn category_label(category: Category) -> String {
    category.as_str().to_ascii_lowercase()
}

fn count(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn template_views(active: Option<&str>) -> Vec<TemplateView> {
    PROFILE_TEMPLATES
        .iter()
        .map(|template| TemplateView {
            id: template.id.to_string(),
            name: template.name.to_string(),
            emoji: template.emoji.to_string(),
            description: template.description.to_string(),
            color: template.color.to_string(),
            habits: template.habits.iter().map(|title| title.to_string()).collect(),
            categories: template
                .categories
                .iter()
                .map(|category| category_label(*category))
                .collect(),
            daily_goal: template.daily_goal,
            active: active == Some(template.id),
        })
        .collect()
}

fn to_task_view(task: &Task, now: DateTime<FixedOffset>) -> TaskView {
    TaskView {
        id: task.id.to_string(),
        title: task.title.clone(),
        due_date: format_date(task.due_date),
        due_at: task.due_at.to_rfc3339(),
        remind_after_minutes: task.remind_after_minutes,
        priority: priority_label(task.priority),
        category: category_label(task.category),
        completed: task.completed,
        overdue: task.is_overdue(now),
        created_at: task.created_at.to_rfc3339(),
        completed_at: task.completed_at.map(|value| value.to_rfc3339()),
        has_reminder: task.notification_id.is_some(),
        subtasks: task
            .subtasks
            .iter()
            .map(|subtask| SubtaskView {
                id: subtask.id.to_string(),
                title: subtask.title.clone(),
                completed: subtask.completed,
            })
            .collect(),
    }
}

fn to_habit_view(habit: &Habit, today: NaiveDate) -> HabitView {
    HabitView {
        id: habit.id.to_string(),
        title: habit.title.clone(),
        streak: habit.streak,
        completed_today: habit.is_completed_on(today),
        completed_dates: habit
            .completed_dates
            .iter()
            .map(|date| format_date(*date))
            .collect(),
    }
}

fn to_mood_view(state: &MoodState) -> MoodView {
    MoodView {
        mood: state.mood.as_str().to_string(),
        message: state.message.clone(),
    }
}

fn to_reminder_view(request: &ReminderRequest) -> ReminderRequestView {
    ReminderRequestView {
        task_id: request.task_id().to_string(),
        generation: request.ticket.generation,
        title: REMINDER_TITLE.to_string(),
        body: request.body(),
        fire_at: request.fire_at.to_rfc3339(),
    }
}

fn achievement_label(kind: AchievementKind) -> &'static str {
    match kind {
        AchievementKind::OnFire => "on_fire",
        AchievementKind::TaskMaster => "task_master",
        AchievementKind::Legend => "legend",
    }
}
