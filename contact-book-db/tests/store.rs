use contact_book_core::{ContactFields, ValidationPolicy};
use contact_book_db::{ContactStore, OperationError, SchemaError, WriteOutcome};

fn memory_store() -> ContactStore {
    ContactStore::open_memory(ValidationPolicy::Strict).unwrap()
}

#[test]
fn add_then_list_round_trip() {
    let store = memory_store();
    let before: Vec<_> = store.list(None).unwrap().into_iter().map(|c| c.id).collect();

    let id = store.add(&ContactFields::new("Alice", "555", "a@x.com")).unwrap();
    assert!(!before.contains(&id));

    let all = store.list(None).unwrap();
    let matching: Vec<_> = all.iter().filter(|c| c.id == id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].fields(), ContactFields::new("Alice", "555", "a@x.com"));
}

#[test]
fn initialize_twice_keeps_rows() {
    let store = memory_store();
    store.add(&ContactFields::new("Alice", "", "")).unwrap();

    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn update_replaces_without_duplicating() {
    let store = memory_store();
    let id = store.add(&ContactFields::new("Alicia", "1", "")).unwrap();
    store.add(&ContactFields::new("Bob", "2", "")).unwrap();

    let outcome = store
        .update(id, &ContactFields::new("Alice", "123", "a@b.com"))
        .unwrap();
    assert!(outcome.is_applied());

    let rows: Vec<_> = store
        .list(None)
        .unwrap()
        .into_iter()
        .filter(|c| c.id == id)
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].fields(), ContactFields::new("Alice", "123", "a@b.com"));
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn delete_then_delete_again() {
    let store = memory_store();
    let id = store.add(&ContactFields::new("Alice", "", "")).unwrap();

    assert_eq!(store.delete(id).unwrap(), WriteOutcome::Applied);
    assert!(store.list(None).unwrap().iter().all(|c| c.id != id));
    assert_eq!(store.delete(id).unwrap(), WriteOutcome::NotFound);
}

#[test]
fn search_across_fields() {
    let store = memory_store();
    store.add(&ContactFields::new("Alice", "555", "a@x.com")).unwrap();
    store.add(&ContactFields::new("Bob", "666", "b@x.com")).unwrap();

    let hits = store.list(Some("555")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Alice");

    let hits = store.list(Some("x.com")).unwrap();
    let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);

    assert!(store.list(Some("zzz")).unwrap().is_empty());
}

#[test]
fn validation_failure_leaves_count_unchanged() {
    let store = memory_store();
    store.add(&ContactFields::new("Bob", "", "")).unwrap();

    let err = store.add(&ContactFields::new("Al1ce", "1", "a@b")).unwrap_err();
    assert!(matches!(err, OperationError::Validation(_)));
    assert_eq!(store.list(None).unwrap().len(), 1);
}

#[test]
fn policy_can_be_switched() {
    let mut store = memory_store();
    assert!(store.add(&ContactFields::new("R2 D2", "", "")).is_err());

    store.set_policy(ValidationPolicy::Lenient);
    assert_eq!(store.policy(), ValidationPolicy::Lenient);
    assert!(store.add(&ContactFields::new("R2 D2", "", "")).is_ok());
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");

    let store = ContactStore::open(&path, ValidationPolicy::Strict).unwrap();
    assert_eq!(store.path(), Some(path.as_path()));
    let id = store.add(&ContactFields::new("Alice", "555", "a@x.com")).unwrap();
    store.shutdown().unwrap();

    let store = ContactStore::open(&path, ValidationPolicy::Strict).unwrap();
    let contact = store.get(id).unwrap().unwrap();
    assert_eq!(contact.name, "Alice");
    store.shutdown().unwrap();
}

#[test]
fn storage_failure_is_reported_and_store_stays_usable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");
    let store = ContactStore::open(&path, ValidationPolicy::Strict).unwrap();
    store.add(&ContactFields::new("Alice", "", "")).unwrap();

    // A second connection installs a trigger that aborts one particular insert
    let raw = rusqlite::Connection::open(&path).unwrap();
    raw.execute_batch(
        "CREATE TRIGGER reject_mallory BEFORE INSERT ON contacts
         WHEN NEW.name = 'Mallory'
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .unwrap();

    let err = store.add(&ContactFields::new("Mallory", "", "")).unwrap_err();
    assert!(matches!(err, OperationError::Sqlite(_)), "unexpected error: {err}");
    assert_eq!(store.count().unwrap(), 1);

    let id = store.add(&ContactFields::new("Bob", "", "")).unwrap();
    let names: Vec<_> = store.list(None).unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Alice", "Bob"]);
    assert!(store.get(id).unwrap().is_some());

    drop(raw);
    store.shutdown().unwrap();
}

#[test]
fn unopenable_path_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("contacts.db");

    let result = ContactStore::open(&path, ValidationPolicy::Strict);
    assert!(matches!(result, Err(SchemaError::Unavailable { .. })));
}

#[test]
fn memory_store_has_no_path() {
    let store = memory_store();
    assert!(store.path().is_none());
}
