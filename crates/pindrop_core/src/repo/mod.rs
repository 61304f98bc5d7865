//! Data access layers for reminder persistence.
//!
//! # Responsibility
//! - `reminder_store`: SQL-level operations over the `reminders` table.
//! - `data_source`: the abstract interface and tagged result boundary the
//!   rest of the crate consumes.
//! - `local_repository`: the SQLite-backed implementation of that interface,
//!   the single point where storage faults become typed outcomes.
//!
//! # Invariants
//! - Storage error types never cross the `ReminderDataSource` boundary.

pub mod data_source;
pub mod local_repository;
pub mod reminder_store;
