//! Core use-case services.
//!
//! # Responsibility
//! - Host `TaskStore`, the single mutation entry point for UI/FFI callers.
//! - Keep derived calculations (streaks, suggestions, stats, mood) as pure
//!   functions over model slices.

pub mod mood;
pub mod stats;
pub mod streak;
pub mod suggest;
pub mod task_store;
