//! Core domain logic for the checklist service.
//! This crate is the single source of truth for checklist/item invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::checklist::{ChecklistId, Item, ItemId, ItemSummary};
pub use repo::checklist_repo::{
    ChecklistRepository, RepoError, RepoResult, SqliteChecklistRepository,
};
pub use service::checklist_service::ChecklistService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
