//! Repository layer for the checklist store.
//!
//! # Responsibility
//! - Define the checklist store contract used by services.
//! - Keep SQL details out of service and HTTP layers.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`ChecklistConflict`,
//!   `ChecklistNotFound`, `ItemNotFound`) in addition to DB transport errors.

pub mod checklist_repo;
