use pocketnote_core::db::migrations::{apply_migrations, latest_version};
use pocketnote_core::db::{open_db, DbError};
use rusqlite::Connection;

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn fresh_database_lands_on_latest_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.sqlite");

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());

    let table_count: u32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'notes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table_count, 1);
}

#[test]
fn reopen_is_a_noop_and_preserves_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.sqlite");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO notes (id, title, content) VALUES ('n1', 'kept', 'body');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());
    let title: String = conn
        .query_row("SELECT title FROM notes WHERE id = 'n1';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(title, "kept");
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();
    assert_eq!(user_version(&conn), latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        latest_version() + 1
    ))
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, .. } if db_version == latest_version() + 1
    ));
}
