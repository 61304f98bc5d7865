//! Test double for the reminder data-source interface.

use async_trait::async_trait;
use pindrop_core::{DataError, DataResult, Reminder, ReminderDataSource, ReminderId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Notify, RwLock};

/// In-memory substitute for the local repository.
///
/// Supports an injected always-fail mode to exercise error paths, and an
/// optional gate that holds every operation open until released so tests can
/// observe in-flight state (the async analogue of pausing a dispatcher).
pub struct FakeDataSource {
    reminders: RwLock<Vec<Reminder>>,
    return_error: AtomicBool,
    gate: Option<Arc<Notify>>,
}

impl FakeDataSource {
    pub fn new() -> Self {
        Self::with_reminders(Vec::new())
    }

    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: RwLock::new(reminders),
            return_error: AtomicBool::new(false),
            gate: None,
        }
    }

    /// Holds every operation at entry until the gate is notified.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_return_error(&self, fail: bool) {
        self.return_error.store(fail, Ordering::SeqCst);
    }

    async fn pause(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }

    fn check_failure(&self) -> DataResult<()> {
        if self.return_error.load(Ordering::SeqCst) {
            return Err(DataError::Storage("Test exception".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReminderDataSource for FakeDataSource {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        self.pause().await;
        self.check_failure()?;
        Ok(self.reminders.read().await.clone())
    }

    async fn save_reminder(&self, reminder: &Reminder) -> DataResult<()> {
        self.pause().await;
        self.check_failure()?;
        let mut reminders = self.reminders.write().await;
        reminders.retain(|existing| existing.id != reminder.id);
        reminders.push(reminder.clone());
        Ok(())
    }

    async fn get_reminder(&self, id: ReminderId) -> DataResult<Reminder> {
        self.pause().await;
        self.check_failure()?;
        self.reminders
            .read()
            .await
            .iter()
            .find(|reminder| reminder.id == id)
            .cloned()
            .ok_or(DataError::NotFound)
    }

    async fn delete_all_reminders(&self) -> DataResult<()> {
        self.pause().await;
        self.check_failure()?;
        self.reminders.write().await.clear();
        Ok(())
    }
}
