//! FFI use-case API for host-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the host UI.
//! - Compose the object graph (connection, repository, view-model) per call
//!   at the process boundary.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Responses are plain envelopes; observable state and one-shot signals
//!   are drained into them before returning.

use pindrop_core::db::open_db;
use pindrop_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ListSignal, LocalReminderRepository, ReminderDataSource, ReminderItem, RemindersListViewModel,
    SaveReminderViewModel, SaveSignal,
};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

const DB_FILE_NAME: &str = "pindrop.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for host smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Reports the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Starts Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Display row for the reminder list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderListItem {
    /// Stable reminder id in string form.
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response envelope for the list screen flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderListResponse {
    pub items: Vec<ReminderListItem>,
    /// Empty-state flag the list screen renders.
    pub no_data: bool,
    /// Human-readable response message for diagnostics/snackbar.
    pub message: String,
}

/// Generic action response envelope for reminder mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderActionResponse {
    pub ok: bool,
    /// Id of the reminder the action produced or touched.
    pub reminder_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ReminderActionResponse {
    fn success(message: impl Into<String>, reminder_id: String) -> Self {
        Self {
            ok: true,
            reminder_id: Some(reminder_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            reminder_id: None,
            message: message.into(),
        }
    }
}

/// Response envelope for a single-reminder lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDetailResponse {
    pub ok: bool,
    pub item: Option<ReminderListItem>,
    pub message: String,
}

/// Loads all reminders for the list screen.
///
/// # FFI contract
/// - Async call, DB-backed execution.
/// - Never panics; read failures arrive in `message` with `no_data = true`.
pub async fn list_reminders() -> ReminderListResponse {
    let repository = match open_repository() {
        Ok(repository) => repository,
        Err(message) => {
            return ReminderListResponse {
                items: Vec::new(),
                no_data: true,
                message,
            }
        }
    };

    let (view_model, mut signals) = RemindersListViewModel::new(repository);
    view_model.load_reminders().await;

    let items: Vec<ReminderListItem> = view_model
        .reminders()
        .borrow()
        .iter()
        .cloned()
        .map(to_list_item)
        .collect();
    let no_data = *view_model.show_no_data().borrow();
    let message = match signals.try_recv() {
        Ok(ListSignal::ShowSnackbar(text)) => text,
        Err(_) => {
            if items.is_empty() {
                "No reminders.".to_string()
            } else {
                format!("Found {} reminder(s).", items.len())
            }
        }
    };

    ReminderListResponse {
        items,
        no_data,
        message,
    }
}

/// Validates and saves a reminder candidate from the save screen.
///
/// # FFI contract
/// - Async call, DB-backed execution.
/// - Never panics; validation and write failures arrive as `ok = false`
///   with the message the screen shows.
pub async fn save_reminder(
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> ReminderActionResponse {
    let repository = match open_repository() {
        Ok(repository) => repository,
        Err(message) => return ReminderActionResponse::failure(message),
    };

    let (view_model, mut signals) = SaveReminderViewModel::new(repository);
    let item = ReminderItem::new(title, description, location, latitude, longitude);
    let reminder_id = item.id.to_string();
    view_model.save_reminder(item).await;

    match signals.try_recv() {
        Ok(SaveSignal::ShowToast(text)) => ReminderActionResponse::success(text, reminder_id),
        Ok(SaveSignal::ShowFieldError(field)) => {
            ReminderActionResponse::failure(field.to_string())
        }
        Ok(SaveSignal::ShowSaveError(text)) => ReminderActionResponse::failure(text),
        Ok(SaveSignal::NavigateBack) | Err(_) => {
            ReminderActionResponse::failure("save_reminder produced no outcome")
        }
    }
}

/// Fetches one reminder by id.
///
/// The host's geofence-trigger callback uses this to resolve the reminder it
/// must render as a notification.
///
/// # FFI contract
/// - Async call, DB-backed execution.
/// - Never panics; unknown and malformed ids both report the stable
///   not-found message.
pub async fn get_reminder(id: String) -> ReminderDetailResponse {
    let repository = match open_repository() {
        Ok(repository) => repository,
        Err(message) => {
            return ReminderDetailResponse {
                ok: false,
                item: None,
                message,
            }
        }
    };

    let parsed = match Uuid::parse_str(id.trim()) {
        Ok(parsed) => parsed,
        Err(_) => {
            return ReminderDetailResponse {
                ok: false,
                item: None,
                message: pindrop_core::DataError::NotFound.to_string(),
            }
        }
    };

    match repository.get_reminder(parsed).await {
        Ok(reminder) => ReminderDetailResponse {
            ok: true,
            item: Some(to_list_item(ReminderItem::from(reminder))),
            message: String::new(),
        },
        Err(err) => ReminderDetailResponse {
            ok: false,
            item: None,
            message: err.to_string(),
        },
    }
}

/// Clears all stored reminders.
///
/// # FFI contract
/// - Async call, DB-backed execution.
/// - Never panics.
pub async fn delete_all_reminders() -> ReminderActionResponse {
    let repository = match open_repository() {
        Ok(repository) => repository,
        Err(message) => return ReminderActionResponse::failure(message),
    };

    match repository.delete_all_reminders().await {
        Ok(()) => ReminderActionResponse {
            ok: true,
            reminder_id: None,
            message: "All reminders cleared.".to_string(),
        },
        Err(err) => ReminderActionResponse::failure(err.to_string()),
    }
}

fn open_repository() -> Result<Arc<LocalReminderRepository>, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        log::error!("event=ffi_open module=ffi status=error error={err}");
        format!("reminder DB open failed: {err}")
    })?;
    let repository = LocalReminderRepository::try_new(conn).map_err(|err| {
        log::error!("event=ffi_open module=ffi status=error error={err}");
        format!("reminder store init failed: {err}")
    })?;
    Ok(Arc::new(repository))
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("PINDROP_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn to_list_item(item: ReminderItem) -> ReminderListItem {
    ReminderListItem {
        id: item.id.to_string(),
        title: item.title,
        description: item.description,
        location: item.location,
        latitude: item.latitude,
        longitude: item.longitude,
    }
}
