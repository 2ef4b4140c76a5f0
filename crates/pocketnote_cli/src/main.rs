//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pocketnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use pocketnote_core::db::open_db_in_memory;
use pocketnote_core::{NoteDraft, NoteStore, SqliteNoteService};

fn main() {
    println!("pocketnote_core version={}", pocketnote_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory backend: {err}");
            std::process::exit(1);
        }
    };

    let mut store = NoteStore::new(SqliteNoteService::new(&conn));
    let draft = match NoteDraft::new("Smoke", "store wiring works") {
        Ok(draft) => draft,
        Err(err) => {
            eprintln!("draft rejected: {err}");
            std::process::exit(1);
        }
    };

    match store.add(draft) {
        Ok(note) => println!("added note id={} title={}", note.id, note.title),
        Err(err) => {
            eprintln!("add failed: {err}");
            std::process::exit(1);
        }
    }

    for note in store.search("smoke") {
        println!("match id={} title={}", note.id, note.title);
    }
}
