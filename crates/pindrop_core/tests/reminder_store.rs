use pindrop_core::db::migrations::latest_version;
use pindrop_core::db::open_db_in_memory;
use pindrop_core::{Reminder, SqliteReminderStore, StoreError};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn save_and_find_roundtrip_preserves_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(&conn).unwrap();

    let reminder = Reminder::new(
        Some("Grocery run".to_string()),
        Some("Pick up oat milk".to_string()),
        Some("Corner market".to_string()),
        Some(59.3293),
        Some(18.0686),
    );
    store.save_reminder(&reminder).unwrap();

    let loaded = store.find_reminder(reminder.id).unwrap().unwrap();
    assert_eq!(loaded, reminder);
}

#[test]
fn save_preserves_absent_optional_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(&conn).unwrap();

    let reminder = Reminder::new(Some("Bare minimum".to_string()), None, None, None, None);
    store.save_reminder(&reminder).unwrap();

    let loaded = store.find_reminder(reminder.id).unwrap().unwrap();
    assert_eq!(loaded.description, None);
    assert_eq!(loaded.location, None);
    assert_eq!(loaded.latitude, None);
    assert_eq!(loaded.longitude, None);
}

#[test]
fn saving_same_id_overwrites_whole_row() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(&conn).unwrap();

    let first = Reminder::new(
        Some("Draft title".to_string()),
        Some("Draft description".to_string()),
        Some("Old place".to_string()),
        Some(1.0),
        Some(2.0),
    );
    store.save_reminder(&first).unwrap();

    let second = Reminder::with_id(
        first.id,
        Some("Final title".to_string()),
        None,
        Some("New place".to_string()),
        Some(3.0),
        Some(4.0),
    );
    store.save_reminder(&second).unwrap();

    let all = store.list_reminders().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], second);
}

#[test]
fn list_returns_distinct_ids_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(&conn).unwrap();

    let first = Reminder::new(Some("first".to_string()), None, None, None, None);
    let second = Reminder::new(Some("second".to_string()), None, None, None, None);
    store.save_reminder(&first).unwrap();
    store.save_reminder(&second).unwrap();

    let all = store.list_reminders().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn find_missing_reminder_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(&conn).unwrap();

    assert!(store.find_reminder(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn delete_one_removes_only_that_row() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(&conn).unwrap();

    let keep = Reminder::new(Some("keep".to_string()), None, None, None, None);
    let removed = Reminder::new(Some("remove".to_string()), None, None, None, None);
    store.save_reminder(&keep).unwrap();
    store.save_reminder(&removed).unwrap();

    store.delete_reminder(removed.id).unwrap();

    let all = store.list_reminders().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
}

#[test]
fn delete_missing_reminder_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(&conn).unwrap();

    let missing = Uuid::new_v4();
    let err = store.delete_reminder(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn delete_all_clears_any_prior_contents() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::try_new(&conn).unwrap();

    for index in 0..3 {
        let reminder = Reminder::new(Some(format!("reminder {index}")), None, None, None, None);
        store.save_reminder(&reminder).unwrap();
    }

    store.delete_all_reminders().unwrap();
    assert!(store.list_reminders().unwrap().is_empty());
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteReminderStore::try_new(&conn) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_reminders_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteReminderStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("reminders"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE reminders (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT,
            description TEXT,
            location TEXT
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteReminderStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredColumn {
            table: "reminders",
            column: "latitude"
        })
    ));
}

#[test]
fn list_rejects_malformed_persisted_id() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO reminders (id, title) VALUES ('not-a-uuid', 'broken');",
        [],
    )
    .unwrap();

    let store = SqliteReminderStore::try_new(&conn).unwrap();
    let err = store.list_reminders().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}
