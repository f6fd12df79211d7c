use contact_book_core::{ContactFields, ContactId, Field, ValidationPolicy, Violation};
use contact_book_db::*;

const STRICT: ValidationPolicy = ValidationPolicy::Strict;

fn alice() -> ContactFields {
    ContactFields::new("Alice", "555", "a@x.com")
}

#[test]
fn insert_assigns_increasing_ids() {
    let conn = open_memory().unwrap();
    let a = insert_contact(&conn, STRICT, &alice()).unwrap();
    let b = insert_contact(&conn, STRICT, &ContactFields::new("Bob", "", "")).unwrap();
    assert!(b > a);
    assert_eq!(count_contacts(&conn).unwrap(), 2);
}

#[test]
fn insert_stores_empty_optionals_as_null() {
    let conn = open_memory().unwrap();
    let id = insert_contact(&conn, STRICT, &ContactFields::new("Bob", "", "")).unwrap();

    let (phone, email): (Option<String>, Option<String>) = conn
        .query_row(
            "SELECT phone, email FROM contacts WHERE id = ?1",
            [id.get()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(phone, None);
    assert_eq!(email, None);

    // Read back as empty strings
    let contact = get_contact(&conn, id).unwrap().unwrap();
    assert_eq!(contact.phone, "");
    assert_eq!(contact.email, "");
}

#[test]
fn invalid_insert_writes_nothing() {
    let conn = open_memory().unwrap();
    let err = insert_contact(&conn, STRICT, &ContactFields::new("Al1ce", "1", "a@b")).unwrap_err();
    match err {
        OperationError::Validation(e) => {
            assert_eq!(e.field, Field::Name);
            assert_eq!(e.violation, Violation::NotAlphabetic);
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert_eq!(count_contacts(&conn).unwrap(), 0);
}

#[test]
fn lenient_policy_accepts_punctuated_name() {
    let conn = open_memory().unwrap();
    let id = insert_contact(
        &conn,
        ValidationPolicy::Lenient,
        &ContactFields::new("O'Brien 2nd", "", ""),
    )
    .unwrap();
    assert_eq!(get_contact(&conn, id).unwrap().unwrap().name, "O'Brien 2nd");
}

#[test]
fn update_replaces_all_fields() {
    let conn = open_memory().unwrap();
    let id = insert_contact(&conn, STRICT, &ContactFields::new("Alicia", "999", "old@x.com")).unwrap();

    let outcome =
        update_contact(&conn, STRICT, id, &ContactFields::new("Alice", "123", "a@b.com")).unwrap();
    assert_eq!(outcome, WriteOutcome::Applied);

    let contact = get_contact(&conn, id).unwrap().unwrap();
    assert_eq!(contact.id, id);
    assert_eq!(contact.fields(), ContactFields::new("Alice", "123", "a@b.com"));
    assert_eq!(count_contacts(&conn).unwrap(), 1);
}

#[test]
fn update_can_clear_optional_fields() {
    let conn = open_memory().unwrap();
    let id = insert_contact(&conn, STRICT, &alice()).unwrap();
    update_contact(&conn, STRICT, id, &ContactFields::new("Alice", "", "")).unwrap();

    let contact = get_contact(&conn, id).unwrap().unwrap();
    assert_eq!(contact.phone, "");
    assert_eq!(contact.email, "");
}

#[test]
fn update_missing_contact_reports_not_found() {
    let conn = open_memory().unwrap();
    let outcome = update_contact(&conn, STRICT, ContactId(42), &alice()).unwrap();
    assert_eq!(outcome, WriteOutcome::NotFound);
    assert_eq!(count_contacts(&conn).unwrap(), 0);
}

#[test]
fn invalid_update_leaves_row_untouched() {
    let conn = open_memory().unwrap();
    let id = insert_contact(&conn, STRICT, &alice()).unwrap();

    let err = update_contact(&conn, STRICT, id, &ContactFields::new("Alice", "55-5", "")).unwrap_err();
    assert!(matches!(err, OperationError::Validation(e) if e.field == Field::Phone));

    let contact = get_contact(&conn, id).unwrap().unwrap();
    assert_eq!(contact.fields(), alice());
}

#[test]
fn delete_removes_row_and_repeats_quietly() {
    let conn = open_memory().unwrap();
    let id = insert_contact(&conn, STRICT, &alice()).unwrap();

    assert_eq!(delete_contact(&conn, id).unwrap(), WriteOutcome::Applied);
    assert!(get_contact(&conn, id).unwrap().is_none());

    // A second delete is not an error
    assert_eq!(delete_contact(&conn, id).unwrap(), WriteOutcome::NotFound);
}

#[test]
fn deleted_ids_are_not_reused() {
    let conn = open_memory().unwrap();
    let first = insert_contact(&conn, STRICT, &alice()).unwrap();
    let second = insert_contact(&conn, STRICT, &ContactFields::new("Bob", "", "")).unwrap();
    delete_contact(&conn, second).unwrap();

    let third = insert_contact(&conn, STRICT, &ContactFields::new("Carol", "", "")).unwrap();
    assert_ne!(third, second);
    assert_ne!(third, first);
    assert!(third > second);
}
