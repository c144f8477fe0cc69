//! Shared handler state.
//!
//! # Invariants
//! - One SQLite connection serves all requests; access is serialized by a mutex.
//! - Store calls run on the blocking pool, never on async worker threads.

use crate::error::AppError;
use checklist_core::{ChecklistService, RepoResult, SqliteChecklistRepository};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Service bound to the shared connection for the duration of one call.
pub type StoreService<'conn> = ChecklistService<SqliteChecklistRepository<'conn>>;

/// State cloned into every axum handler.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Takes ownership of a migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `op` against the checklist service on the blocking pool.
    ///
    /// Store errors are mapped to [`AppError`]; a poisoned lock or a
    /// panicked task yields a 500.
    pub async fn run<T, F>(&self, op: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: for<'conn> FnOnce(&mut StoreService<'conn>) -> RepoResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| AppError::internal("checklist store lock poisoned"))?;
            let mut service = ChecklistService::new(SqliteChecklistRepository::new(&mut guard));
            op(&mut service).map_err(AppError::from)
        })
        .await
        .map_err(|err| AppError::internal("checklist store task failed").with_source(err))?
    }
}
