//! Reminder domain model.
//!
//! # Responsibility
//! - Define the persisted reminder record and the UI-facing item shape.
//! - Keep the two shapes losslessly convertible.
//!
//! # Invariants
//! - `id` is generated once at creation and never reused.
//! - Field-level optionality mirrors the persisted column shape: only the
//!   identifier is mandatory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a reminder, generated at creation time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReminderId = Uuid;

/// Persisted reminder record: one row in the `reminders` table.
///
/// Coordinates are decimal degrees picked on the host map; they stay `None`
/// until the host carries a pin through the save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable id, unique across all reminders. Saving an existing id
    /// overwrites the whole row.
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human-readable label of the picked place.
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a record with a generated stable id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, location, latitude, longitude)
    }

    /// Creates a record with a caller-provided stable id.
    ///
    /// Used when identity already exists, e.g. when a save candidate built by
    /// the UI is persisted under the id it was handed at creation.
    pub fn with_id(
        id: ReminderId,
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }
}

/// UI-facing reminder shape: the save candidate the host assembles and the
/// display row the list state exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderItem {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReminderItem {
    /// Creates a save candidate with a generated id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }
}

impl From<Reminder> for ReminderItem {
    fn from(record: Reminder) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            location: record.location,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

impl From<ReminderItem> for Reminder {
    fn from(item: ReminderItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            location: item.location,
            latitude: item.latitude,
            longitude: item.longitude,
        }
    }
}
