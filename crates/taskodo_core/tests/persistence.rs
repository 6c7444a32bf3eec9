use chrono::{DateTime, Duration, FixedOffset, NaiveDate};
use std::sync::Arc;
use taskodo_core::repo::snapshot::{HABITS_KEY, TASKS_KEY};
use taskodo_core::{
    Category, FixedClock, KeyValueStore, NewTaskRequest, NoopNotifier, Priority,
    SqliteKeyValueStore, StorageError, StorageResult, StoreConfig, TaskStore,
};

fn at(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap()
}

fn request(title: &str) -> NewTaskRequest {
    NewTaskRequest {
        title: title.to_string(),
        due_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        priority: Priority::Low,
        category: Category::Finance,
        remind_after_minutes: 10,
        subtask_titles: vec!["receipt".to_string()],
    }
}

fn open<S: KeyValueStore>(storage: S, clock: &Arc<FixedClock>) -> TaskStore<S> {
    TaskStore::open(
        storage,
        Arc::new(NoopNotifier),
        clock.clone(),
        StoreConfig::default(),
    )
}

/// Reads succeed, every write fails.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::InvalidData(format!("{key} is read-only")))
    }
}

#[test]
fn state_survives_reopen() {
    let clock = Arc::new(FixedClock::new(at("2024-01-03T10:00:00+00:00")));
    let mut store = open(SqliteKeyValueStore::open_in_memory().unwrap(), &clock);

    let task_id = store.add_task(request("taxes")).unwrap();
    store.toggle_task(task_id).unwrap();
    store.apply_template("fitness").unwrap();
    let habit_id = store.habits()[0].id;
    store.toggle_habit(habit_id).unwrap();
    let expected_tasks = store.tasks().to_vec();

    let reopened = open(store.into_storage(), &clock);
    assert_eq!(reopened.tasks(), expected_tasks.as_slice());
    assert_eq!(reopened.habits().len(), 5);
    assert_eq!(reopened.habit(habit_id).unwrap().streak, 1);
    assert_eq!(reopened.active_template().map(|t| t.id), Some("fitness"));
    assert_eq!(reopened.streak(), 1);
}

#[test]
fn file_database_persists_between_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskodo.db");
    let clock = Arc::new(FixedClock::new(at("2024-01-03T10:00:00+00:00")));

    let mut store = open(SqliteKeyValueStore::open(&path).unwrap(), &clock);
    store.add_task(request("rent")).unwrap();
    drop(store);

    let reopened = open(SqliteKeyValueStore::open(&path).unwrap(), &clock);
    assert_eq!(reopened.tasks().len(), 1);
    assert_eq!(reopened.tasks()[0].title, "rent");
}

#[test]
fn write_failures_do_not_roll_back_memory() {
    let clock = Arc::new(FixedClock::new(at("2024-01-03T10:00:00+00:00")));
    let mut store = open(ReadOnlyStore, &clock);

    let id = store.add_task(request("offline")).unwrap();
    assert_eq!(store.toggle_task(id), Some(true));
    store.add_habit("Walk").unwrap();

    assert_eq!(store.tasks().len(), 1);
    assert!(store.tasks()[0].completed);
    assert_eq!(store.habits().len(), 1);
}

#[test]
fn corrupt_records_start_empty() {
    let storage = SqliteKeyValueStore::open_in_memory().unwrap();
    storage.set(TASKS_KEY, "not json").unwrap();
    storage.set(HABITS_KEY, "[]").unwrap();
    let clock = Arc::new(FixedClock::new(at("2024-01-03T10:00:00+00:00")));

    let store = open(storage, &clock);
    assert!(store.tasks().is_empty());
    assert!(store.habits().is_empty());
}

#[test]
fn reopen_recomputes_broken_task_streak_and_drifted_habit_streak() {
    let clock = Arc::new(FixedClock::new(at("2024-01-01T10:00:00+00:00")));
    let mut store = open(SqliteKeyValueStore::open_in_memory().unwrap(), &clock);
    let task_id = store.add_task(request("once")).unwrap();
    store.toggle_task(task_id).unwrap();
    let habit_id = store.add_habit("Journal").unwrap();
    store.toggle_habit(habit_id).unwrap();
    assert_eq!(store.streak(), 1);

    clock.advance(Duration::days(3));
    let reopened = open(store.into_storage(), &clock);
    assert_eq!(reopened.streak(), 0);
    assert_eq!(reopened.habit(habit_id).unwrap().streak, 0);
    assert_eq!(reopened.habit(habit_id).unwrap().completed_dates.len(), 1);
}
