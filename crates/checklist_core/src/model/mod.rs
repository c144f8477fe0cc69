//! Checklist domain model.
//!
//! # Responsibility
//! - Define the records persisted by the checklist store.
//! - Define the wire-facing item projection returned by list queries.
//!
//! # Invariants
//! - Identifiers are assigned by storage and never reused.
//! - Items reference their checklist by name.

pub mod checklist;
