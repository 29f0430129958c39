//! Validation errors surfaced at snapshot time.

use thiserror::Error;

/// Errors raised while editing or validating the intake form.
///
/// Validation errors block submission; no request is issued while any field
/// fails its check.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FormError {
    /// The field name is not part of the ten-field catalog.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A required field was left empty.
    #[error("{field} is required")]
    MissingValue {
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// A numeric field holds a value that does not parse to its declared type.
    #[error("{field}: '{value}' is not a valid number")]
    InvalidNumber {
        /// Wire name of the offending field.
        field: &'static str,
        /// The raw value as entered.
        value: String,
    },

    /// A choice field holds a value outside its allowed set.
    #[error("{field}: '{value}' is not an allowed value")]
    InvalidChoice {
        /// Wire name of the offending field.
        field: &'static str,
        /// The raw value as entered.
        value: String,
    },
}

impl FormError {
    /// Wire name of the field this error concerns, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownField(name) => Some(name),
            Self::MissingValue { field }
            | Self::InvalidNumber { field, .. }
            | Self::InvalidChoice { field, .. } => Some(field),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FormError>;
