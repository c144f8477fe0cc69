//! Checklist use-case service.
//!
//! # Responsibility
//! - Provide the entry points the HTTP layer calls for every checklist operation.
//! - Emit one metadata-only log event per mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Item and checklist names are never logged; only ids and lengths are.

use crate::model::checklist::{ChecklistId, ItemId, ItemSummary};
use crate::repo::checklist_repo::{ChecklistRepository, RepoError, RepoResult};
use log::{info, warn};

/// Use-case service wrapper over a [`ChecklistRepository`].
pub struct ChecklistService<R: ChecklistRepository> {
    repo: R,
}

impl<R: ChecklistRepository> ChecklistService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns all checklist names.
    pub fn list_checklist_names(&self) -> RepoResult<Vec<String>> {
        self.repo.list_checklist_names()
    }

    /// Creates a checklist with a unique name and returns its id.
    pub fn create_checklist(&mut self, name: &str) -> RepoResult<ChecklistId> {
        let result = self.repo.create_checklist(name);
        log_outcome("checklist_create", &result, |id| format!("id={id}"));
        result
    }

    /// Deletes a checklist and every item filed under its name.
    pub fn delete_checklist(&mut self, name: &str) -> RepoResult<()> {
        let result = self.repo.delete_checklist(name);
        log_outcome("checklist_delete", &result, |_| {
            format!("name_len={}", name.chars().count())
        });
        result
    }

    /// Lists the items of a checklist as `{Name, Checked}` summaries.
    ///
    /// A checklist with no items and an unknown checklist both yield an
    /// empty list.
    pub fn list_items(&self, checklist_name: &str) -> RepoResult<Vec<ItemSummary>> {
        let items = self.repo.list_items(checklist_name)?;
        Ok(items.iter().map(|item| item.summary()).collect())
    }

    /// Adds an unchecked item under `checklist_name` and returns its id.
    pub fn create_item(&self, checklist_name: &str, item_name: &str) -> RepoResult<ItemId> {
        let result = self.repo.create_item(checklist_name, item_name);
        log_outcome("item_create", &result, |id| format!("id={id}"));
        result
    }

    /// Checks or unchecks one item.
    pub fn set_item_checked(
        &self,
        checklist_name: &str,
        id: ItemId,
        checked: bool,
    ) -> RepoResult<()> {
        let result = self.repo.set_item_checked(checklist_name, id, checked);
        log_outcome("item_check", &result, |_| {
            format!("id={id} checked={checked}")
        });
        result
    }

    /// Deletes one item.
    pub fn delete_item(&self, checklist_name: &str, id: ItemId) -> RepoResult<()> {
        let result = self.repo.delete_item(checklist_name, id);
        log_outcome("item_delete", &result, |_| format!("id={id}"));
        result
    }

    /// Verifies the underlying store answers queries.
    pub fn ping(&self) -> RepoResult<()> {
        self.repo.ping()
    }
}

fn log_outcome<T>(event: &str, result: &RepoResult<T>, describe: impl FnOnce(&T) -> String) {
    match result {
        Ok(value) => info!(
            "event={event} module=service status=ok {}",
            describe(value)
        ),
        Err(err) => warn!(
            "event={event} module=service status=error error_code={}",
            error_code(err)
        ),
    }
}

fn error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::Db(_) => "db",
        RepoError::ChecklistConflict(_) => "checklist_conflict",
        RepoError::ChecklistNotFound(_) => "checklist_not_found",
        RepoError::ItemNotFound { .. } => "item_not_found",
        RepoError::InvalidData(_) => "invalid_data",
    }
}
