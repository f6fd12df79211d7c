//! Read queries for the contacts database.

use contact_book_core::{Contact, ContactId};
use rusqlite::{Connection, Row, params};

use crate::operations::OperationError;

/// List contacts ordered by name.
///
/// With no filter (or an empty one) every contact is returned. Otherwise a
/// contact matches when its name, phone, or email is `LIKE '%filter%'`,
/// so SQLite's rules apply: ASCII letters compare case-insensitively and
/// `%`/`_` in the filter act as wildcards.
pub fn list_contacts(
    conn: &Connection,
    filter: Option<&str>,
) -> Result<Vec<Contact>, OperationError> {
    match filter {
        Some(f) if !f.is_empty() => {
            let pattern = format!("%{}%", f);
            let mut stmt = conn.prepare(
                "SELECT id, name, phone, email FROM contacts
                 WHERE name LIKE ?1 OR phone LIKE ?1 OR email LIKE ?1
                 ORDER BY name",
            )?;
            let rows = stmt.query_map(params![pattern], row_to_contact)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
        _ => {
            let mut stmt =
                conn.prepare("SELECT id, name, phone, email FROM contacts ORDER BY name")?;
            let rows = stmt.query_map([], row_to_contact)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
    }
}

/// Fetch a single contact by id.
pub fn get_contact(conn: &Connection, id: ContactId) -> Result<Option<Contact>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name, phone, email FROM contacts WHERE id = ?1")?;
    let result = stmt.query_row(params![id.get()], row_to_contact);
    match result {
        Ok(contact) => Ok(Some(contact)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Number of stored contacts.
pub fn count_contacts(conn: &Connection) -> Result<usize, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(count as usize)
}

fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: ContactId(row.get(0)?),
        name: row.get(1)?,
        phone: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        email: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}
