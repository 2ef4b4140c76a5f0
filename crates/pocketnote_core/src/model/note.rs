//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical `Note` record and its opaque identifier.
//! - Validate creation candidates before they reach the store.
//!
//! # Invariants
//! - `NoteId` values are opaque strings; fresh ids are UUID v4 and unique
//!   within and across sessions.
//! - `NoteDraft` cannot be constructed with a blank title or content.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier for a note.
///
/// Kept as a newtype over `String` so callers can carry externally assigned
/// ids (the remote side may mint its own) while fresh local ids stay UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wraps an externally assigned identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh identifier guaranteed unique for this session.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id used for lookup, update targeting and deletion.
    pub id: NoteId,
    /// Short display title.
    pub title: String,
    /// Free-form body text, mutable after creation.
    pub content: String,
}

impl Note {
    /// Creates a note with a caller-provided id.
    ///
    /// Used by remote decode paths where identity already exists externally.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Validation error for note creation candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    /// Title is empty after trimming.
    BlankTitle,
    /// Content is empty after trimming.
    BlankContent,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "note title must not be blank"),
            Self::BlankContent => write!(f, "note content must not be blank"),
        }
    }
}

impl Error for DraftValidationError {}

/// Validated candidate for note creation.
///
/// The creation flow discards blank drafts before the store is ever invoked,
/// so store code never has to reject them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    content: String,
}

impl NoteDraft {
    /// Validates a creation candidate.
    ///
    /// # Errors
    /// - `BlankTitle` when `title` trims to empty.
    /// - `BlankContent` when `content` trims to empty.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DraftValidationError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err(DraftValidationError::BlankTitle);
        }
        if content.trim().is_empty() {
            return Err(DraftValidationError::BlankContent);
        }
        Ok(Self { title, content })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Promotes the draft to a note with a freshly generated id.
    pub fn into_note(self) -> Note {
        Note {
            id: NoteId::generate(),
            title: self.title,
            content: self.content,
        }
    }
}
