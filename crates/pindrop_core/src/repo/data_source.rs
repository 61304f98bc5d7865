//! Abstract reminder data access and the tagged result boundary.
//!
//! # Responsibility
//! - Define the interface consumed by the view-models and implemented by the
//!   local repository and by test substitutes.
//! - Define the typed outcome callers inspect instead of raw storage errors.
//!
//! # Invariants
//! - `DataError::NotFound` renders the stable user-facing not-found message.

use crate::model::reminder::{Reminder, ReminderId};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DataResult<T> = Result<T, DataError>;

/// Tagged outcome of a data-source operation.
///
/// Storage faults arrive here already flattened to a message; callers never
/// see the storage error types themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    NotFound,
    Storage(String),
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Reminder not found!"),
            Self::Storage(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DataError {}

/// Data access interface for reminder records.
///
/// Kept minimal (four operations) so the SQLite-backed repository and
/// in-memory substitutes implement it uniformly. Writes return a result for
/// symmetry with reads; a failed save is surfaced, not dropped.
#[async_trait]
pub trait ReminderDataSource: Send + Sync {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>>;
    async fn save_reminder(&self, reminder: &Reminder) -> DataResult<()>;
    async fn get_reminder(&self, id: ReminderId) -> DataResult<Reminder>;
    async fn delete_all_reminders(&self) -> DataResult<()>;
}
