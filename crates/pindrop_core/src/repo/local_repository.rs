//! SQLite-backed implementation of the reminder data-source interface.
//!
//! # Responsibility
//! - Own the single-writer connection and serialize store access through it.
//! - Translate store faults into `DataError` at this one boundary.
//!
//! # Invariants
//! - Suspension points are exactly the store calls; the lock is held for one
//!   operation at a time.
//! - Absent rows surface as `DataError::NotFound`, never as an empty success.

use crate::model::reminder::{Reminder, ReminderId};
use crate::repo::data_source::{DataError, DataResult, ReminderDataSource};
use crate::repo::reminder_store::{SqliteReminderStore, StoreError, StoreResult};
use async_trait::async_trait;
use log::error;
use rusqlite::Connection;
use tokio::sync::Mutex;

/// Local reminder repository over a migrated SQLite connection.
pub struct LocalReminderRepository {
    conn: Mutex<Connection>,
}

impl LocalReminderRepository {
    /// Wraps a migrated connection, validating store readiness once.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        SqliteReminderStore::try_new(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl ReminderDataSource for LocalReminderRepository {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        let conn = self.conn.lock().await;
        SqliteReminderStore::new(&conn)
            .list_reminders()
            .map_err(|err| storage_error("get_reminders", err))
    }

    async fn save_reminder(&self, reminder: &Reminder) -> DataResult<()> {
        let conn = self.conn.lock().await;
        SqliteReminderStore::new(&conn)
            .save_reminder(reminder)
            .map_err(|err| storage_error("save_reminder", err))
    }

    async fn get_reminder(&self, id: ReminderId) -> DataResult<Reminder> {
        let conn = self.conn.lock().await;
        match SqliteReminderStore::new(&conn).find_reminder(id) {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(DataError::NotFound),
            Err(err) => Err(storage_error("get_reminder", err)),
        }
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        let conn = self.conn.lock().await;
        SqliteReminderStore::new(&conn)
            .delete_all_reminders()
            .map_err(|err| storage_error("delete_all_reminders", err))
    }
}

fn storage_error(operation: &str, err: StoreError) -> DataError {
    error!("event=reminder_repo module=repo status=error op={operation} error={err}");
    DataError::Storage(err.to_string())
}
