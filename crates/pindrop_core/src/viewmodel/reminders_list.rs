//! Reminder list screen state.
//!
//! # Responsibility
//! - Load all reminders and expose loading/empty flags plus display rows.
//! - Report read failures on a transient signal channel.
//!
//! # Invariants
//! - `show_loading` is true exactly while a load call is in flight.
//! - After a completed load, `show_no_data` is true iff the resolved list is
//!   empty or the call errored.

use crate::model::reminder::ReminderItem;
use crate::repo::data_source::ReminderDataSource;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// One-shot signals the list screen renders and discards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSignal {
    ShowSnackbar(String),
}

/// State holder for the reminder list screen.
pub struct RemindersListViewModel {
    source: Arc<dyn ReminderDataSource>,
    show_loading: watch::Sender<bool>,
    show_no_data: watch::Sender<bool>,
    reminders: watch::Sender<Vec<ReminderItem>>,
    signals: mpsc::UnboundedSender<ListSignal>,
}

impl RemindersListViewModel {
    /// Creates the view-model and hands back the signal receiver the host
    /// UI drains.
    pub fn new(
        source: Arc<dyn ReminderDataSource>,
    ) -> (Self, mpsc::UnboundedReceiver<ListSignal>) {
        let (signals, signal_rx) = mpsc::unbounded_channel();
        let (show_loading, _) = watch::channel(false);
        let (show_no_data, _) = watch::channel(false);
        let (reminders, _) = watch::channel(Vec::new());
        let view_model = Self {
            source,
            show_loading,
            show_no_data,
            reminders,
            signals,
        };
        (view_model, signal_rx)
    }

    /// Observable loading flag.
    pub fn show_loading(&self) -> watch::Receiver<bool> {
        self.show_loading.subscribe()
    }

    /// Observable empty-state flag; meaningful after the first load.
    pub fn show_no_data(&self) -> watch::Receiver<bool> {
        self.show_no_data.subscribe()
    }

    /// Observable display rows.
    pub fn reminders(&self) -> watch::Receiver<Vec<ReminderItem>> {
        self.reminders.subscribe()
    }

    /// Loads all reminders into the observable list state.
    ///
    /// A failed load leaves an empty list and the no-data flag set until the
    /// caller invokes this again; there is no retry policy here.
    pub async fn load_reminders(&self) {
        self.show_loading.send_replace(true);

        match self.source.get_reminders().await {
            Ok(records) => {
                let items: Vec<ReminderItem> =
                    records.into_iter().map(ReminderItem::from).collect();
                info!(
                    "event=load_reminders module=viewmodel status=ok count={}",
                    items.len()
                );
                self.show_no_data.send_replace(items.is_empty());
                self.reminders.send_replace(items);
            }
            Err(err) => {
                warn!("event=load_reminders module=viewmodel status=error error={err}");
                let _ = self.signals.send(ListSignal::ShowSnackbar(err.to_string()));
                self.reminders.send_replace(Vec::new());
                self.show_no_data.send_replace(true);
            }
        }

        self.show_loading.send_replace(false);
    }
}
