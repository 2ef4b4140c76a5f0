//! Note store: canonical collection plus remote reconciliation rules.
//!
//! # Responsibility
//! - Own the canonical in-memory note collection.
//! - Provide search/add/update/delete/reload with defined consistency
//!   semantics between local visible state and the remote source of truth.
//!
//! # Invariants
//! - New notes are prepended (most-recent-first); update preserves order.
//! - `add` never inserts locally without remote acknowledgment.
//! - `update`/`delete` apply locally even when the remote write fails; the
//!   divergence is recorded as a `DriftEvent` until the next `reload`.
//! - All reads are copy-on-read; callers can never alias the canonical
//!   collection.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::remote::{RemoteError, RemoteNoteService};
use crate::search::filter::filter_notes;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store error for operations whose contract aborts on remote failure.
#[derive(Debug)]
pub enum StoreError {
    Remote(RemoteError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Remote(err) => Some(err),
        }
    }
}

impl From<RemoteError> for StoreError {
    fn from(value: RemoteError) -> Self {
        Self::Remote(value)
    }
}

/// Mutation that succeeded locally but failed remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftOperation {
    Update,
    Delete,
}

impl Display for DriftOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Recorded local/remote divergence.
///
/// Local state stays authoritative for display; the drift log makes the
/// acknowledged inconsistency observable instead of implicit. A successful
/// `reload` clears it because the remote result becomes the truth again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftEvent {
    /// Id of the note whose remote write failed.
    pub id: NoteId,
    /// Which mutation diverged.
    pub operation: DriftOperation,
    /// Human-readable remote failure.
    pub error: String,
}

/// Canonical note store over an injected remote service.
///
/// Mutations take `&mut self`, so operations against one collection are
/// serialized by construction; there is no racy interleaving of local-state
/// updates.
pub struct NoteStore<R: RemoteNoteService> {
    remote: R,
    notes: Vec<Note>,
    drift: Vec<DriftEvent>,
}

impl<R: RemoteNoteService> NoteStore<R> {
    /// Creates an empty store using the provided remote service.
    pub fn new(remote: R) -> Self {
        Self::with_notes(remote, Vec::new())
    }

    /// Creates a store seeded with an initial collection.
    ///
    /// Used by callers that carry a bootstrap list before the first reload.
    pub fn with_notes(remote: R, notes: Vec<Note>) -> Self {
        Self {
            remote,
            notes,
            drift: Vec::new(),
        }
    }

    /// Replaces the local collection with the full remote truth.
    ///
    /// Clears recorded drift: after a successful reload the visible state is
    /// the remote state by definition.
    ///
    /// # Errors
    /// - `StoreError::Remote` when the fetch fails; the local collection is
    ///   left unchanged.
    pub fn reload(&mut self) -> Result<&[Note], StoreError> {
        let notes = self.remote.search_notes()?;
        info!(
            "event=notes_reload module=store status=ok count={}",
            notes.len()
        );
        self.notes = notes;
        self.drift.clear();
        Ok(&self.notes)
    }

    /// Returns all notes matching `query` (case-insensitive substring on
    /// title or content); the full collection when `query` trims to empty.
    ///
    /// Pure with respect to the collection: no side effects, fresh copies.
    pub fn search(&self, query: &str) -> Vec<Note> {
        filter_notes(&self.notes, query)
    }

    /// Creates a note from a validated draft.
    ///
    /// Assigns a fresh id, persists remotely, and prepends the confirmed
    /// note locally only after remote acknowledgment. No optimistic insert:
    /// on failure the collection is unchanged and the caller sees the error.
    pub fn add(&mut self, draft: NoteDraft) -> Result<Note, StoreError> {
        let candidate = draft.into_note();
        let confirmed = match self.remote.add_note(&candidate) {
            Ok(note) => note,
            Err(err) => {
                warn!(
                    "event=note_add module=store status=error id={} error={err}",
                    candidate.id
                );
                return Err(err.into());
            }
        };

        info!("event=note_add module=store status=ok id={}", confirmed.id);
        self.notes.insert(0, confirmed.clone());
        Ok(confirmed)
    }

    /// Replaces the local entry with matching id, preserving order, then
    /// issues a best-effort remote write.
    ///
    /// Returns `false` (silent no-op, remote untouched) when the id is
    /// unknown locally. A remote failure does not roll back the local
    /// replacement; it is recorded as drift.
    pub fn update(&mut self, note: Note) -> bool {
        let Some(position) = self.position_of(&note.id) else {
            debug!(
                "event=note_update module=store status=skipped id={} reason=not_found",
                note.id
            );
            return false;
        };

        self.notes[position] = note.clone();
        match self.remote.update_note(&note) {
            Ok(()) => {
                info!("event=note_update module=store status=ok id={}", note.id);
            }
            Err(err) => self.record_drift(note.id, DriftOperation::Update, &err),
        }
        true
    }

    /// Removes the note with matching id locally and remotely.
    ///
    /// Returns `false` (silent no-op, remote untouched) when the id is
    /// unknown locally. The local entry is removed even when the remote
    /// deletion fails; the divergence is recorded as drift.
    pub fn delete(&mut self, id: &NoteId) -> bool {
        let Some(position) = self.position_of(id) else {
            debug!(
                "event=note_delete module=store status=skipped id={id} reason=not_found"
            );
            return false;
        };

        let remote_result = self.remote.delete_note(id);
        let removed = self.notes.remove(position);
        match remote_result {
            Ok(()) => {
                info!("event=note_delete module=store status=ok id={id}");
            }
            Err(err) => self.record_drift(removed.id, DriftOperation::Delete, &err),
        }
        true
    }

    /// Returns a copy of the current collection.
    pub fn notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Returns a copy of the note with matching id.
    pub fn get(&self, id: &NoteId) -> Option<Note> {
        self.position_of(id).map(|position| self.notes[position].clone())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns mutations that succeeded locally but failed remotely since
    /// the last successful reload.
    pub fn drift_events(&self) -> &[DriftEvent] {
        &self.drift
    }

    fn position_of(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| &note.id == id)
    }

    fn record_drift(&mut self, id: NoteId, operation: DriftOperation, err: &RemoteError) {
        warn!(
            "event=local_drift module=store operation={operation} id={id} error={err}"
        );
        self.drift.push(DriftEvent {
            id,
            operation,
            error: err.to_string(),
        });
    }
}
