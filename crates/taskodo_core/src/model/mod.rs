//! Domain model for tasks, habits and profile templates.
//!
//! # Responsibility
//! - Define canonical data structures persisted by the store.
//! - Provide validation and small lifecycle helpers per record.
//!
//! # Invariants
//! - Every task and habit is identified by a stable UUID.
//! - `Task::completed_at` is present iff `Task::completed` is true.
//! - Profile templates are static reference data, never user-owned.

pub mod habit;
pub mod task;
pub mod template;
