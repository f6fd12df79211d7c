//! Core types for the contact book.
//!
//! Holds the contact data model and the field validation rules. Nothing
//! in this crate performs I/O; persistence lives in `contact-book-db`.

pub mod contact;
pub mod validation;

pub use contact::{Contact, ContactFields, ContactId, ContactIdParseError};
pub use validation::{
    Field, PolicyParseError, ValidationError, ValidationPolicy, Violation, is_email_valid,
    is_name_valid, is_phone_valid,
};
