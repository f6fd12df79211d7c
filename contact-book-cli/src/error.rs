use contact_book_core::{ContactId, ValidationError};
use contact_book_db::OperationError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Input rejected by the active validation profile
    #[error("Invalid input: {0}")]
    Invalid(ValidationError),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// No contact with the given id
    #[error("Contact #{0} not found.")]
    NotFound(ContactId),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap a store failure, keeping validation errors structured.
    pub(crate) fn operation(context: &str, err: OperationError) -> Self {
        match err {
            OperationError::Validation(e) => Self::Invalid(e),
            OperationError::Sqlite(e) => Self::Database(format!("{context}: {e}")),
        }
    }
}
