//! Collection search entry points.
//!
//! # Responsibility
//! - Expose the pure filter behind `NoteStore::search`.
//! - Keep match semantics (case-insensitive substring) in one place.

pub mod filter;
