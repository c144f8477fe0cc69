//! Checklist/item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the checklist store operations over `checklists` and `items`.
//! - Translate missing rows and duplicate names into semantic errors.
//!
//! # Invariants
//! - Every mutation is committed before the call returns.
//! - Checklist create and delete run in `IMMEDIATE` transactions so the
//!   name check and the write cannot interleave with another writer.
//! - Deleting a checklist deletes its items in the same transaction.
//! - Identifiers come from `AUTOINCREMENT` and are never reused.

use crate::db::DbError;
use crate::model::checklist::{ChecklistId, Item, ItemId};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for checklist persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A checklist with this name already exists.
    ChecklistConflict(String),
    ChecklistNotFound(String),
    ItemNotFound {
        checklist_name: String,
        id: ItemId,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::ChecklistConflict(name) => write!(f, "checklist already exists: {name}"),
            Self::ChecklistNotFound(name) => write!(f, "checklist not found: {name}"),
            Self::ItemNotFound { checklist_name, id } => {
                write!(f, "item {id} not found in checklist {checklist_name}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted checklist data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::ChecklistConflict(_)
            | Self::ChecklistNotFound(_)
            | Self::ItemNotFound { .. }
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the checklist store.
pub trait ChecklistRepository {
    /// All checklist names in creation order.
    fn list_checklist_names(&self) -> RepoResult<Vec<String>>;
    /// Inserts a checklist; `ChecklistConflict` when the name is taken.
    fn create_checklist(&mut self, name: &str) -> RepoResult<ChecklistId>;
    /// Removes a checklist and its items; `ChecklistNotFound` when absent.
    fn delete_checklist(&mut self, name: &str) -> RepoResult<()>;
    /// Items of the named checklist in creation order; empty when none.
    fn list_items(&self, checklist_name: &str) -> RepoResult<Vec<Item>>;
    /// Inserts an unchecked item. The checklist is not required to exist.
    fn create_item(&self, checklist_name: &str, item_name: &str) -> RepoResult<ItemId>;
    /// Sets `checked` on `(checklist_name, id)`; `ItemNotFound` when absent.
    fn set_item_checked(&self, checklist_name: &str, id: ItemId, checked: bool)
        -> RepoResult<()>;
    /// Removes `(checklist_name, id)`; `ItemNotFound` when absent.
    fn delete_item(&self, checklist_name: &str, id: ItemId) -> RepoResult<()>;
    /// Touches both tables to prove the store is reachable and migrated.
    fn ping(&self) -> RepoResult<()>;
}

/// SQLite-backed checklist repository.
pub struct SqliteChecklistRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteChecklistRepository<'conn> {
    /// Wraps a migrated connection (see [`crate::db::open_db`]).
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl ChecklistRepository for SqliteChecklistRepository<'_> {
    fn list_checklist_names(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM checklists ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get("name")?);
        }
        Ok(names)
    }

    fn create_checklist(&mut self, name: &str) -> RepoResult<ChecklistId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        if checklist_exists_in_tx(&tx, name)? {
            return Err(RepoError::ChecklistConflict(name.to_string()));
        }

        tx.execute("INSERT INTO checklists (name) VALUES (?1);", [name])
            .map_err(|err| map_unique_violation(err, name))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(id)
    }

    fn delete_checklist(&mut self, name: &str) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        if !checklist_exists_in_tx(&tx, name)? {
            return Err(RepoError::ChecklistNotFound(name.to_string()));
        }

        tx.execute("DELETE FROM items WHERE checklist_name = ?1;", [name])?;
        tx.execute("DELETE FROM checklists WHERE name = ?1;", [name])?;
        tx.commit()?;

        Ok(())
    }

    fn list_items(&self, checklist_name: &str) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, checklist_name, name, checked
             FROM items
             WHERE checklist_name = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([checklist_name])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn create_item(&self, checklist_name: &str, item_name: &str) -> RepoResult<ItemId> {
        self.conn.execute(
            "INSERT INTO items (checklist_name, name, checked) VALUES (?1, ?2, 0);",
            params![checklist_name, item_name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn set_item_checked(
        &self,
        checklist_name: &str,
        id: ItemId,
        checked: bool,
    ) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE items
             SET checked = ?3
             WHERE id = ?1
               AND checklist_name = ?2;",
            params![id, checklist_name, checked],
        )?;

        if changed == 0 {
            return Err(item_not_found(checklist_name, id));
        }

        Ok(())
    }

    fn delete_item(&self, checklist_name: &str, id: ItemId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM items WHERE id = ?1 AND checklist_name = ?2;",
            params![id, checklist_name],
        )?;

        if changed == 0 {
            return Err(item_not_found(checklist_name, id));
        }

        Ok(())
    }

    fn ping(&self) -> RepoResult<()> {
        self.conn.query_row(
            "SELECT (SELECT COUNT(*) FROM (SELECT 1 FROM checklists LIMIT 1))
                  + (SELECT COUNT(*) FROM (SELECT 1 FROM items LIMIT 1));",
            [],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(())
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let checked = match row.get::<_, i64>("checked")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid checked value `{other}` in items.checked"
            )));
        }
    };

    Ok(Item {
        id: row.get("id")?,
        checklist_name: row.get("checklist_name")?,
        name: row.get("name")?,
        checked,
    })
}

fn checklist_exists_in_tx(tx: &Transaction<'_>, name: &str) -> RepoResult<bool> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM checklists WHERE name = ?1);",
        [name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn map_unique_violation(err: rusqlite::Error, name: &str) -> RepoError {
    match &err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepoError::ChecklistConflict(name.to_string())
        }
        _ => err.into(),
    }
}

fn item_not_found(checklist_name: &str, id: ItemId) -> RepoError {
    RepoError::ItemNotFound {
        checklist_name: checklist_name.to_string(),
        id,
    }
}
