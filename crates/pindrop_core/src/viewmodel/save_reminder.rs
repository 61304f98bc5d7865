//! Save reminder screen state.
//!
//! # Responsibility
//! - Validate a save candidate's fields before anything touches storage.
//! - Persist valid candidates and signal the outcome to the host UI.
//!
//! # Invariants
//! - Title is checked before location; a candidate failing both reports
//!   only the title error.
//! - Validation failures never reach the data source.

use crate::model::reminder::{Reminder, ReminderItem};
use crate::repo::data_source::ReminderDataSource;
use log::{info, warn};
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Field-level validation outcome, the analogue of a string-resource id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingTitle,
    MissingLocation,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Please enter title"),
            Self::MissingLocation => write!(f, "Please select location"),
        }
    }
}

/// One-shot signals the save screen renders and discards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveSignal {
    ShowFieldError(FieldError),
    ShowSaveError(String),
    ShowToast(String),
    NavigateBack,
}

/// State holder for the save reminder screen.
pub struct SaveReminderViewModel {
    source: Arc<dyn ReminderDataSource>,
    show_loading: watch::Sender<bool>,
    signals: mpsc::UnboundedSender<SaveSignal>,
}

impl SaveReminderViewModel {
    /// Creates the view-model and hands back the signal receiver the host
    /// UI drains.
    pub fn new(
        source: Arc<dyn ReminderDataSource>,
    ) -> (Self, mpsc::UnboundedReceiver<SaveSignal>) {
        let (signals, signal_rx) = mpsc::unbounded_channel();
        let (show_loading, _) = watch::channel(false);
        let view_model = Self {
            source,
            show_loading,
            signals,
        };
        (view_model, signal_rx)
    }

    /// Observable loading flag.
    pub fn show_loading(&self) -> watch::Receiver<bool> {
        self.show_loading.subscribe()
    }

    /// Checks the candidate's mandatory fields.
    ///
    /// Pure and synchronous; emits at most one field error signal and
    /// returns whether the candidate may be persisted.
    pub fn validate_entered_data(&self, item: &ReminderItem) -> bool {
        if item.title.as_deref().unwrap_or("").is_empty() {
            let _ = self
                .signals
                .send(SaveSignal::ShowFieldError(FieldError::MissingTitle));
            return false;
        }

        if item.location.as_deref().unwrap_or("").is_empty() {
            let _ = self
                .signals
                .send(SaveSignal::ShowFieldError(FieldError::MissingLocation));
            return false;
        }

        true
    }

    /// Validates and persists the candidate.
    ///
    /// On success the saved confirmation and the navigate-back signal are
    /// emitted in that order; a failed write surfaces on the error signal
    /// and does not navigate.
    pub async fn save_reminder(&self, item: ReminderItem) {
        if !self.validate_entered_data(&item) {
            return;
        }

        self.show_loading.send_replace(true);
        let record = Reminder::from(item);
        let result = self.source.save_reminder(&record).await;
        self.show_loading.send_replace(false);

        match result {
            Ok(()) => {
                info!(
                    "event=save_reminder module=viewmodel status=ok id={}",
                    record.id
                );
                let _ = self
                    .signals
                    .send(SaveSignal::ShowToast("Reminder Saved !".to_string()));
                let _ = self.signals.send(SaveSignal::NavigateBack);
            }
            Err(err) => {
                warn!(
                    "event=save_reminder module=viewmodel status=error id={} error={err}",
                    record.id
                );
                let _ = self.signals.send(SaveSignal::ShowSaveError(err.to_string()));
            }
        }
    }
}
