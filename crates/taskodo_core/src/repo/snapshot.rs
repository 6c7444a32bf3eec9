//! JSON record codecs for store collections.
//!
//! # Responsibility
//! - Map task, habit and profile collections to their storage keys.
//! - Validate decoded records before they reach the store.
//!
//! # Invariants
//! - A missing key decodes as an empty collection.
//! - A record that fails validation fails the whole collection load.

use crate::model::habit::Habit;
use crate::model::task::Task;
use crate::repo::kv_repo::{KeyValueStore, StorageError, StorageResult};
use serde::{Deserialize, Serialize};

pub const TASKS_KEY: &str = "@taskodo_tasks_v1";
pub const HABITS_KEY: &str = "@taskodo_habits_v1";
pub const PROFILE_KEY: &str = "@taskodo_profile_v1";

/// Persisted profile selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub active_template_id: Option<String>,
}

pub fn load_tasks(store: &impl KeyValueStore) -> StorageResult<Vec<Task>> {
    let tasks: Vec<Task> = load_json(store, TASKS_KEY)?.unwrap_or_default();
    for task in &tasks {
        task.validate().map_err(|err| {
            StorageError::InvalidData(format!("{TASKS_KEY} task {}: {err}", task.id))
        })?;
    }
    Ok(tasks)
}

pub fn save_tasks(store: &impl KeyValueStore, tasks: &[Task]) -> StorageResult<()> {
    save_json(store, TASKS_KEY, &tasks)
}

pub fn load_habits(store: &impl KeyValueStore) -> StorageResult<Vec<Habit>> {
    let habits: Vec<Habit> = load_json(store, HABITS_KEY)?.unwrap_or_default();
    for habit in &habits {
        habit.validate().map_err(|err| {
            StorageError::InvalidData(format!("{HABITS_KEY} habit {}: {err}", habit.id))
        })?;
    }
    Ok(habits)
}

pub fn save_habits(store: &impl KeyValueStore, habits: &[Habit]) -> StorageResult<()> {
    save_json(store, HABITS_KEY, &habits)
}

pub fn load_profile(store: &impl KeyValueStore) -> StorageResult<ProfileRecord> {
    Ok(load_json(store, PROFILE_KEY)?.unwrap_or_default())
}

pub fn save_profile(store: &impl KeyValueStore, profile: &ProfileRecord) -> StorageResult<()> {
    save_json(store, PROFILE_KEY, profile)
}

fn load_json<T: for<'de> Deserialize<'de>>(
    store: &impl KeyValueStore,
    key: &str,
) -> StorageResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::InvalidData(format!("{key}: {err}"))),
        None => Ok(None),
    }
}

fn save_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let encoded = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    store.set(key, &encoded)
}

#[cfg(test)]
mod tests {
    use super::{load_profile, load_tasks, save_profile, ProfileRecord, TASKS_KEY};
    use crate::repo::kv_repo::{KeyValueStore, SqliteKeyValueStore, StorageError};

    #[test]
    fn missing_keys_load_as_empty() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        assert!(load_tasks(&store).unwrap().is_empty());
        assert_eq!(load_profile(&store).unwrap(), ProfileRecord::default());
    }

    #[test]
    fn corrupt_task_record_is_invalid_data() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        store.set(TASKS_KEY, "[{\"id\": 42}]").unwrap();
        let err = load_tasks(&store).unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }

    #[test]
    fn profile_round_trips() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        let profile = ProfileRecord {
            active_template_id: Some("fitness".to_string()),
        };
        save_profile(&store, &profile).unwrap();
        assert_eq!(load_profile(&store).unwrap(), profile);
    }
}
