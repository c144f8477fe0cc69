use checklist_core::db::open_db_in_memory;
use checklist_core::{ChecklistRepository, ChecklistService, RepoError, SqliteChecklistRepository};

#[test]
fn created_checklist_is_listed_exactly_once() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteChecklistRepository::new(&mut conn);

    repo.create_checklist("Groceries").unwrap();
    repo.create_checklist("Chores").unwrap();

    let names = repo.list_checklist_names().unwrap();
    assert_eq!(names, vec!["Groceries".to_string(), "Chores".to_string()]);
    assert_eq!(names.iter().filter(|name| *name == "Groceries").count(), 1);
}

#[test]
fn first_checklist_gets_id_one_and_ids_increase() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteChecklistRepository::new(&mut conn);

    let first = repo.create_checklist("A").unwrap();
    let second = repo.create_checklist("B").unwrap();

    assert_eq!(first, 1);
    assert!(second > first);
    assert_eq!(repo.list_checklist_names().unwrap(), vec!["A", "B"]);
}

#[test]
fn duplicate_name_conflicts_and_leaves_store_unchanged() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteChecklistRepository::new(&mut conn);

    let id = repo.create_checklist("Groceries").unwrap();
    let err = repo.create_checklist("Groceries").unwrap_err();

    assert!(matches!(err, RepoError::ChecklistConflict(ref name) if name == "Groceries"));
    assert_eq!(repo.list_checklist_names().unwrap(), vec!["Groceries"]);
    // The next insert still gets the id right after the original one.
    assert_eq!(repo.create_checklist("Chores").unwrap(), id + 1);
}

#[test]
fn empty_and_whitespace_names_are_stored_like_any_other() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteChecklistRepository::new(&mut conn);

    repo.create_checklist("").unwrap();
    repo.create_checklist("   ").unwrap();

    assert!(matches!(
        repo.create_checklist("").unwrap_err(),
        RepoError::ChecklistConflict(ref name) if name.is_empty()
    ));
    assert_eq!(repo.list_checklist_names().unwrap(), vec!["", "   "]);
}

#[test]
fn deleting_missing_checklist_returns_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteChecklistRepository::new(&mut conn);

    let err = repo.delete_checklist("Nope").unwrap_err();
    assert!(matches!(err, RepoError::ChecklistNotFound(ref name) if name == "Nope"));
}

#[test]
fn deleting_checklist_removes_it_and_its_items() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteChecklistRepository::new(&mut conn);

    repo.create_checklist("Groceries").unwrap();
    repo.create_checklist("Chores").unwrap();
    repo.create_item("Groceries", "Milk").unwrap();
    repo.create_item("Chores", "Dishes").unwrap();

    repo.delete_checklist("Groceries").unwrap();

    assert_eq!(repo.list_checklist_names().unwrap(), vec!["Chores"]);
    assert!(repo.list_items("Groceries").unwrap().is_empty());
    assert_eq!(repo.list_items("Chores").unwrap().len(), 1);
}

#[test]
fn checklist_ids_are_not_reused_after_delete() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteChecklistRepository::new(&mut conn);

    repo.create_checklist("A").unwrap();
    let second = repo.create_checklist("B").unwrap();
    repo.delete_checklist("B").unwrap();

    let third = repo.create_checklist("B").unwrap();
    assert!(third > second);
}

#[test]
fn service_delegates_checklist_operations() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = ChecklistService::new(SqliteChecklistRepository::new(&mut conn));

    service.create_checklist("Groceries").unwrap();
    assert!(matches!(
        service.create_checklist("Groceries"),
        Err(RepoError::ChecklistConflict(_))
    ));
    assert_eq!(service.list_checklist_names().unwrap(), vec!["Groceries"]);

    service.delete_checklist("Groceries").unwrap();
    assert!(service.list_checklist_names().unwrap().is_empty());
    service.ping().unwrap();
}
