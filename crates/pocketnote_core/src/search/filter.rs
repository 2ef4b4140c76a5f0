//! Case-insensitive substring filtering over a note collection.
//!
//! # Responsibility
//! - Implement the search predicate used by the note store.
//!
//! # Invariants
//! - A query that trims to empty matches every note.
//! - Matching is plain substring containment on title OR content, no
//!   tokenization and no ranking.
//! - Input collections are never mutated; results are fresh copies in the
//!   original order.

use crate::model::note::Note;

/// Filters a collection by case-insensitive substring match.
///
/// Returns the full collection (copied) when `query` trims to empty.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return notes.to_vec();
    }

    let needle = trimmed.to_lowercase();
    notes
        .iter()
        .filter(|note| note_matches(note, &needle))
        .cloned()
        .collect()
}

/// Returns whether a note contains the lowercased needle in title or content.
pub fn note_matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle) || note.content.to_lowercase().contains(needle)
}
