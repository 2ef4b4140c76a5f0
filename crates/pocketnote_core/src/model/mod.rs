//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Gate note creation behind draft validation.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that is never reused.
//! - A `NoteDraft` always carries non-blank title and content.

pub mod note;
