//! SQLite migration registry and executor.
//!
//! # Invariants
//! - Registry versions increase strictly; the executor applies the pending
//!   tail inside one transaction.
//! - `PRAGMA user_version` mirrors the last applied version.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "init",
    sql: include_str!("0001_init.sql"),
}];

/// Latest schema version this build can produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |last| last.version)
}

/// Brings the connection's schema up to [`latest_version`].
///
/// A database stamped with a version newer than this build knows is rejected
/// untouched; downgrading is not supported.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let installed = schema_version(conn)?;
    let latest = latest_version();

    if installed > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: installed,
            latest_supported: latest,
        });
    }

    let pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|migration| migration.version > installed)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in &pending {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
        info!(
            "event=db_migrate module=db status=ok version={} name={}",
            migration.version, migration.name
        );
    }
    tx.commit()?;

    Ok(())
}

fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}
