//! Canonical note collection and its consistency rules.
//!
//! # Responsibility
//! - Orchestrate remote calls into collection-level operations.
//! - Keep UI/CLI layers decoupled from remote service details.

pub mod note_store;
