//! The contact store: one owned connection plus the active validation profile.
//!
//! Open a `ContactStore` once at startup and pass it by reference to
//! whatever needs it. `open_memory` gives an equivalent store with no file
//! behind it.

use std::path::{Path, PathBuf};

use contact_book_core::{Contact, ContactFields, ContactId, ValidationPolicy};
use rusqlite::Connection;

use crate::operations::{self, OperationError, WriteOutcome};
use crate::queries;
use crate::schema::{self, SchemaError};

pub struct ContactStore {
    conn: Connection,
    path: Option<PathBuf>,
    policy: ValidationPolicy,
}

impl ContactStore {
    /// Open or create the database at `path` and ensure the schema exists.
    ///
    /// A file that cannot be opened or created yields
    /// `SchemaError::Unavailable`; no store is returned in that case.
    pub fn open(path: &Path, policy: ValidationPolicy) -> Result<Self, SchemaError> {
        let conn = schema::open_database(path)?;
        log::debug!(
            "Opened contact store at {} ({} profile)",
            path.display(),
            policy
        );
        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
            policy,
        };
        store.initialize()?;
        Ok(store)
    }

    /// An in-memory store with the full schema.
    pub fn open_memory(policy: ValidationPolicy) -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_memory()?,
            path: None,
            policy,
        })
    }

    /// Ensure the schema exists. Safe to call any number of times.
    pub fn initialize(&self) -> Result<(), SchemaError> {
        schema::create_schema(&self.conn)
    }

    /// Database file backing this store, `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ValidationPolicy) {
        self.policy = policy;
    }

    /// Validate and insert a new contact, returning its id.
    pub fn add(&self, fields: &ContactFields) -> Result<ContactId, OperationError> {
        operations::insert_contact(&self.conn, self.policy, fields)
    }

    /// Validate and replace all fields of contact `id`.
    pub fn update(
        &self,
        id: ContactId,
        fields: &ContactFields,
    ) -> Result<WriteOutcome, OperationError> {
        operations::update_contact(&self.conn, self.policy, id, fields)
    }

    pub fn delete(&self, id: ContactId) -> Result<WriteOutcome, OperationError> {
        operations::delete_contact(&self.conn, id)
    }

    /// Contacts matching `filter`, ordered by name. See [`queries::list_contacts`].
    pub fn list(&self, filter: Option<&str>) -> Result<Vec<Contact>, OperationError> {
        queries::list_contacts(&self.conn, filter)
    }

    pub fn get(&self, id: ContactId) -> Result<Option<Contact>, OperationError> {
        queries::get_contact(&self.conn, id)
    }

    pub fn count(&self) -> Result<usize, OperationError> {
        queries::count_contacts(&self.conn)
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    ///
    /// Dropping the store also closes it, silently.
    pub fn shutdown(self) -> Result<(), OperationError> {
        self.conn.close().map_err(|(_, e)| OperationError::Sqlite(e))?;
        log::debug!("Contact store closed");
        Ok(())
    }
}
