//! Core domain logic for Pocketnote.
//! This crate is the single source of truth for note-collection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod remote;
pub mod search;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{DraftValidationError, Note, NoteDraft, NoteId};
pub use remote::{RemoteError, RemoteNoteService, RemoteResult, SqliteNoteService};
pub use search::filter::{filter_notes, note_matches};
pub use store::note_store::{DriftEvent, DriftOperation, NoteStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
