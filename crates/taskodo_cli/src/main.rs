//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskodo_core` linkage.
//! - Print a one-screen summary of a store, in memory or at a given path.
//!
//! Usage: `taskodo_cli [DB_PATH]`

use std::process::ExitCode;
use std::sync::Arc;
use taskodo_core::{
    NoopNotifier, SqliteKeyValueStore, StorageResult, StoreConfig, SystemClock, TaskStore,
};

fn main() -> ExitCode {
    println!("taskodo_core ping={}", taskodo_core::ping());
    println!("taskodo_core version={}", taskodo_core::core_version());

    let storage = match open_storage(std::env::args().nth(1)) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("taskodo_core store=error error={err}");
            return ExitCode::FAILURE;
        }
    };

    let store = TaskStore::open(
        storage,
        Arc::new(NoopNotifier),
        Arc::new(SystemClock),
        StoreConfig::default(),
    );
    let stats = store.stats();
    println!(
        "taskodo_core tasks={} completed={} habits={} streak={} level={} xp={}",
        stats.total_tasks,
        stats.completed_tasks,
        stats.active_habits,
        stats.streak,
        stats.level,
        stats.xp
    );
    for task in store.get_smart_suggestions() {
        println!(
            "suggest priority={} category={} due={} title={}",
            task.priority.as_str(),
            task.category.as_str(),
            task.due_date,
            task.title
        );
    }
    ExitCode::SUCCESS
}

fn open_storage(path: Option<String>) -> StorageResult<SqliteKeyValueStore> {
    match path {
        Some(path) => SqliteKeyValueStore::open(path),
        None => SqliteKeyValueStore::open_in_memory(),
    }
}
