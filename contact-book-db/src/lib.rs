//! SQLite persistence layer for the contact book.
//!
//! Provides schema creation, the add/update/delete operations, filtered
//! listing, and the `ContactStore` handle that owns the connection.
//! Backed by SQLite via rusqlite with the bundled feature.

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{OperationError, WriteOutcome, delete_contact, insert_contact, update_contact};
pub use queries::{count_contacts, get_contact, list_contacts};
pub use schema::{DEFAULT_DB_FILE, SchemaError, open_database, open_memory};
pub use store::ContactStore;
