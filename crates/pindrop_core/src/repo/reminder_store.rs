//! SQL operations over the `reminders` table.
//!
//! # Responsibility
//! - Keep all SQL details for reminder rows in one place.
//! - Expose whole-row save/read/delete primitives to the repository.
//!
//! # Invariants
//! - `save_reminder` is an idempotent upsert keyed by id.
//! - Read paths reject malformed persisted state instead of masking it.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::reminder::{Reminder, ReminderId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

const REMINDER_COLUMNS: [&str; 6] = [
    "id",
    "title",
    "description",
    "location",
    "latitude",
    "longitude",
];

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for reminder persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    NotFound(ReminderId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "reminder not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted reminder data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection has schema version {actual_version}, expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{column}` in table `{table}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// SQLite-backed reminder store.
pub struct SqliteReminderStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReminderStore<'conn> {
    /// Constructs a store from a migrated, ready connection.
    ///
    /// Rejects connections that have not run migrations or whose `reminders`
    /// table does not carry the expected columns.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    pub(crate) fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts or fully overwrites the row with the record's id.
    pub fn save_reminder(&self, reminder: &Reminder) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO reminders (
                id,
                title,
                description,
                location,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                reminder.id.to_string(),
                reminder.title.as_deref(),
                reminder.description.as_deref(),
                reminder.location.as_deref(),
                reminder.latitude,
                reminder.longitude,
            ],
        )?;

        Ok(())
    }

    /// Returns all stored reminders in insertion order.
    pub fn list_reminders(&self) -> StoreResult<Vec<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();
        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }

        Ok(reminders)
    }

    /// Returns the reminder with the given id, or `None` when absent.
    pub fn find_reminder(&self, id: ReminderId) -> StoreResult<Option<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_reminder_row(row)?));
        }

        Ok(None)
    }

    /// Deletes one reminder by id.
    pub fn delete_reminder(&self, id: ReminderId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM reminders WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    /// Clears all reminder rows.
    pub fn delete_all_reminders(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM reminders;", [])?;
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> StoreResult<Reminder> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{id_text}` in reminders.id"))
    })?;

    Ok(Reminder {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version == 0 {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "reminders")? {
        return Err(StoreError::MissingRequiredTable("reminders"));
    }

    for column in REMINDER_COLUMNS {
        if !table_has_column(conn, "reminders", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "reminders",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1;")?;
    Ok(stmt.exists([table])?)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        if row.get::<_, String>(1)? == column {
            return Ok(true);
        }
    }
    Ok(false)
}
