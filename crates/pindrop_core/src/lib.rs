//! Core domain logic for Pindrop location reminders.
//! This crate is the single source of truth for reminder persistence and
//! screen-state behavior; the host UI renders what it exposes.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod viewmodel;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{Reminder, ReminderId, ReminderItem};
pub use repo::data_source::{DataError, DataResult, ReminderDataSource};
pub use repo::local_repository::LocalReminderRepository;
pub use repo::reminder_store::{SqliteReminderStore, StoreError, StoreResult};
pub use viewmodel::reminders_list::{ListSignal, RemindersListViewModel};
pub use viewmodel::save_reminder::{FieldError, SaveReminderViewModel, SaveSignal};

/// Minimal health-check API for early host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
