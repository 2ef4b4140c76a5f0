//! Remote note service contract.
//!
//! # Responsibility
//! - Define the four-call interface the note store consumes.
//! - Keep transport/storage details behind the trait boundary.
//!
//! # Invariants
//! - `search_notes` returns the remote truth, newest first.
//! - `add_note` returns the confirmed note; its id is authoritative and may
//!   differ from the client-proposed one.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;

pub use sqlite::SqliteNoteService;

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Error surface of the remote note service.
#[derive(Debug)]
pub enum RemoteError {
    /// The remote side cannot be reached or failed mid-call.
    Unavailable(String),
    /// Target note does not exist remotely.
    NotFound(NoteId),
    /// Reference backend failure.
    Db(DbError),
    /// Remote returned a row that cannot be decoded.
    InvalidData(String),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "remote unavailable: {message}"),
            Self::NotFound(id) => write!(f, "remote note not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid remote note data: {message}"),
        }
    }
}

impl Error for RemoteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RemoteError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RemoteError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Interface to the remote source of truth for notes.
///
/// The store performs each call inline; implementations that wrap a network
/// transport are expected to supply their own timeout policy.
pub trait RemoteNoteService {
    /// Returns the full remote collection, newest first.
    fn search_notes(&self) -> RemoteResult<Vec<Note>>;
    /// Persists one note and returns the confirmed record.
    fn add_note(&self, note: &Note) -> RemoteResult<Note>;
    /// Replaces the remote record with matching id.
    fn update_note(&self, note: &Note) -> RemoteResult<()>;
    /// Removes the remote record by id.
    fn delete_note(&self, id: &NoteId) -> RemoteResult<()>;
}
