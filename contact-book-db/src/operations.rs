//! Add, update, and delete operations on contacts.
//!
//! Each operation validates its input first and then runs exactly one
//! parameterized statement, so a call either takes full effect or none.

use contact_book_core::{ContactFields, ContactId, ValidationError, ValidationPolicy};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

/// Result of an update or delete addressed by id.
///
/// A statement that matched no row is not an error at the storage layer;
/// callers needing strict semantics check for `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    NotFound,
}

impl WriteOutcome {
    fn from_changed(changed: usize) -> Self {
        if changed == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }

    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Empty optional fields are stored as NULL.
fn nullable(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Insert a new contact. Returns the id assigned by the database.
pub fn insert_contact(
    conn: &Connection,
    policy: ValidationPolicy,
    fields: &ContactFields,
) -> Result<ContactId, OperationError> {
    policy.check(fields)?;
    conn.execute(
        "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)",
        params![fields.name, nullable(&fields.phone), nullable(&fields.email)],
    )?;
    let id = ContactId(conn.last_insert_rowid());
    log::debug!("Inserted contact #{} ({})", id, fields.name);
    Ok(id)
}

/// Replace all three fields of an existing contact.
pub fn update_contact(
    conn: &Connection,
    policy: ValidationPolicy,
    id: ContactId,
    fields: &ContactFields,
) -> Result<WriteOutcome, OperationError> {
    policy.check(fields)?;
    let changed = conn.execute(
        "UPDATE contacts SET name = ?2, phone = ?3, email = ?4 WHERE id = ?1",
        params![
            id.get(),
            fields.name,
            nullable(&fields.phone),
            nullable(&fields.email),
        ],
    )?;
    let outcome = WriteOutcome::from_changed(changed);
    log::debug!("Update contact #{}: {:?}", id, outcome);
    Ok(outcome)
}

/// Delete a contact by id.
pub fn delete_contact(conn: &Connection, id: ContactId) -> Result<WriteOutcome, OperationError> {
    let changed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id.get()])?;
    let outcome = WriteOutcome::from_changed(changed);
    log::debug!("Delete contact #{}: {:?}", id, outcome);
    Ok(outcome)
}
