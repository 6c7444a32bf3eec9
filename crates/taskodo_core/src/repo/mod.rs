//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the string-keyed storage contract the store persists through.
//! - Encode task/habit/profile collections as JSON records.
//!
//! # Invariants
//! - Records are whole-collection snapshots; there is no partial update.
//! - Read paths reject invalid persisted records instead of masking them.

pub mod kv_repo;
pub mod snapshot;
