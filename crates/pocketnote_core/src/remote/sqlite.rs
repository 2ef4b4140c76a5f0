//! SQLite-backed reference implementation of the remote note service.
//!
//! # Responsibility
//! - Provide a working local stand-in for the remote source of truth.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Listing order is `created_at DESC, id ASC` (newest first, stable).
//! - Write paths report `NotFound` instead of silently affecting zero rows.

use crate::model::note::{Note, NoteId};
use crate::remote::{RemoteError, RemoteNoteService, RemoteResult};
use rusqlite::{params, Connection, Row};

const NOTE_SELECT_SQL: &str = "SELECT id, title, content FROM notes";

/// Reference remote backed by a migrated SQLite connection.
pub struct SqliteNoteService<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteService<'conn> {
    /// Constructs a service from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RemoteNoteService for SqliteNoteService<'_> {
    fn search_notes(&self) -> RemoteResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY created_at DESC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn add_note(&self, note: &Note) -> RemoteResult<Note> {
        self.conn.execute(
            "INSERT INTO notes (id, title, content) VALUES (?1, ?2, ?3);",
            params![note.id.as_str(), note.title.as_str(), note.content.as_str()],
        )?;

        // The reference backend accepts the client-proposed id as-is.
        Ok(note.clone())
    }

    fn update_note(&self, note: &Note) -> RemoteResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes SET title = ?2, content = ?3 WHERE id = ?1;",
            params![note.id.as_str(), note.title.as_str(), note.content.as_str()],
        )?;

        if changed == 0 {
            return Err(RemoteError::NotFound(note.id.clone()));
        }

        Ok(())
    }

    fn delete_note(&self, id: &NoteId) -> RemoteResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id.as_str()])?;

        if changed == 0 {
            return Err(RemoteError::NotFound(id.clone()));
        }

        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RemoteResult<Note> {
    let id_text: String = row.get("id")?;
    if id_text.is_empty() {
        return Err(RemoteError::InvalidData(
            "empty id value in notes.id".to_string(),
        ));
    }

    Ok(Note {
        id: NoteId::new(id_text),
        title: row.get("title")?,
        content: row.get("content")?,
    })
}
