//! Field format rules applied before a contact is written.
//!
//! The three predicates are pure. `ValidationPolicy` picks which of them
//! apply and turns a failure into a `ValidationError` naming the field and
//! the rule it broke.

use serde::Deserialize;
use thiserror::Error;

use crate::contact::ContactFields;

/// True iff `s` is non-empty and every character is alphabetic or whitespace.
pub fn is_name_valid(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

/// True iff `s` is empty or consists only of the digits `0`-`9`.
pub fn is_phone_valid(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// True iff `s` is empty, or contains an `@` and no whitespace or comma.
pub fn is_email_valid(s: &str) -> bool {
    s.is_empty() || (s.contains('@') && !s.chars().any(|c| c.is_whitespace() || c == ','))
}

/// A contact field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a field value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    Empty,
    NotAlphabetic,
    NotNumeric,
    MissingAt,
    ContainsWhitespace,
    ContainsComma,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Empty => "must not be empty",
            Self::NotAlphabetic => "may only contain letters and spaces",
            Self::NotNumeric => "may only contain digits",
            Self::MissingAt => "must contain '@'",
            Self::ContainsWhitespace => "must not contain whitespace",
            Self::ContainsComma => "must not contain ','",
        };
        f.write_str(msg)
    }
}

/// A field value rejected before any storage I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {violation}")]
pub struct ValidationError {
    pub field: Field,
    pub violation: Violation,
}

impl ValidationError {
    pub fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }
}

/// Which validation profile the store enforces.
///
/// `Strict` applies every rule. `Lenient` accepts any non-empty name; the
/// phone and email rules are the same in both profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    #[default]
    Strict,
    Lenient,
}

impl ValidationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    /// Check all three fields, in the order name, phone, email.
    ///
    /// Returns the first failure.
    pub fn check(&self, fields: &ContactFields) -> Result<(), ValidationError> {
        self.check_name(&fields.name)?;
        check_phone(&fields.phone)?;
        check_email(&fields.email)?;
        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::new(Field::Name, Violation::Empty));
        }
        if *self == Self::Strict && !is_name_valid(name) {
            return Err(ValidationError::new(Field::Name, Violation::NotAlphabetic));
        }
        Ok(())
    }
}

fn check_phone(phone: &str) -> Result<(), ValidationError> {
    if is_phone_valid(phone) {
        Ok(())
    } else {
        Err(ValidationError::new(Field::Phone, Violation::NotNumeric))
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if is_email_valid(email) {
        return Ok(());
    }
    let violation = if !email.contains('@') {
        Violation::MissingAt
    } else if email.chars().any(char::is_whitespace) {
        Violation::ContainsWhitespace
    } else {
        Violation::ContainsComma
    };
    Err(ValidationError::new(Field::Email, violation))
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string cannot be parsed into a `ValidationPolicy`.
#[derive(Debug, Clone)]
pub struct PolicyParseError(pub String);

impl std::fmt::Display for PolicyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown validation profile: '{}' (expected 'strict' or 'lenient')",
            self.0
        )
    }
}

impl std::error::Error for PolicyParseError {}

impl std::str::FromStr for ValidationPolicy {
    type Err = PolicyParseError;

    /// Parse a profile name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" | "loose" => Ok(Self::Lenient),
            _ => Err(PolicyParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
