//! Durable snapshots of the directory.
//!
//! The store is memory-only; a snapshot file written on a timer and at
//! shutdown is what survives a restart.

pub mod snapshot_file;
pub mod snapshot_manager;
pub mod snapshot_observer;
