//! Flutter-facing bindings for `taskodo_core`.

pub mod api;
