use pindrop_core::db::{open_db, open_db_in_memory};
use pindrop_core::{
    DataError, LocalReminderRepository, Reminder, ReminderDataSource, StoreError,
};
use rusqlite::Connection;
use uuid::Uuid;

fn repository() -> LocalReminderRepository {
    let conn = open_db_in_memory().unwrap();
    LocalReminderRepository::try_new(conn).unwrap()
}

#[tokio::test]
async fn save_then_get_returns_equal_reminder() {
    let repository = repository();
    let reminder = Reminder::new(
        Some("title".to_string()),
        Some("description".to_string()),
        Some("location".to_string()),
        Some(15.0),
        Some(25.0),
    );

    repository.save_reminder(&reminder).await.unwrap();

    let loaded = repository.get_reminder(reminder.id).await.unwrap();
    assert_eq!(loaded.title, reminder.title);
    assert_eq!(loaded.description, reminder.description);
    assert_eq!(loaded.location, reminder.location);
    assert_eq!(loaded.latitude, reminder.latitude);
    assert_eq!(loaded.longitude, reminder.longitude);
}

#[tokio::test]
async fn save_two_reminders_lists_both() {
    let repository = repository();
    let first = Reminder::new(
        Some("title".to_string()),
        Some("description".to_string()),
        Some("location".to_string()),
        Some(15.0),
        Some(25.0),
    );
    let second = Reminder::new(
        Some("title 2".to_string()),
        Some("description 2".to_string()),
        Some("location 2".to_string()),
        Some(5.0),
        Some(10.0),
    );

    repository.save_reminder(&first).await.unwrap();
    repository.save_reminder(&second).await.unwrap();

    let all = repository.get_reminders().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first));
    assert!(all.contains(&second));
}

#[tokio::test]
async fn get_missing_reminder_returns_not_found_message() {
    let repository = repository();

    let err = repository.get_reminder(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err, DataError::NotFound);
    assert_eq!(err.to_string(), "Reminder not found!");
}

#[tokio::test]
async fn delete_all_then_list_is_empty() {
    let repository = repository();
    let reminder = Reminder::new(
        Some("title".to_string()),
        Some("description".to_string()),
        Some("location".to_string()),
        Some(15.0),
        Some(25.0),
    );

    repository.save_reminder(&reminder).await.unwrap();
    repository.delete_all_reminders().await.unwrap();

    let all = repository.get_reminders().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn storage_fault_is_translated_to_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pindrop.db");

    let repository = LocalReminderRepository::try_new(open_db(&path).unwrap()).unwrap();

    // A second connection pulls the table out from under the repository.
    let saboteur = Connection::open(&path).unwrap();
    saboteur.execute_batch("DROP TABLE reminders;").unwrap();

    let err = repository.get_reminders().await.unwrap_err();
    match err {
        DataError::Storage(message) => assert!(message.contains("no such table")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = LocalReminderRepository::try_new(conn);
    assert!(matches!(
        result,
        Err(StoreError::UninitializedConnection { .. })
    ));
}
