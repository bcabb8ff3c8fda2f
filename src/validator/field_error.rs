use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation error.
///
/// Validation collects every error for an input rather than stopping at the
/// first, so callers can report all problems at once.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FieldError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Type mismatch for field '{0}': expected {1}, got {2}")]
    TypeMismatch(String, String, String),

    #[error("Length out of range for field '{0}': {1}")]
    LengthOutOfRange(String, String),

    #[error("Value out of range for field '{0}': {1}")]
    ValueOutOfRange(String, String),

    #[error("Pattern mismatch for field '{0}': {1}")]
    PatternMismatch(String, String),

    #[error("Value for field '{0}' is not in the allowed set: {1}")]
    NotInAllowedValues(String, String),

    #[error("Field '{0}' references unresolved shape '{1}'")]
    UnresolvedShape(String, String),

    #[error("Input at '{0}' nests deeper than {1} levels")]
    DepthExceeded(String, usize),
}

impl FieldError {
    /// Path of the field this error refers to
    pub fn field(&self) -> &str {
        match self {
            FieldError::MissingField(field)
            | FieldError::TypeMismatch(field, _, _)
            | FieldError::LengthOutOfRange(field, _)
            | FieldError::ValueOutOfRange(field, _)
            | FieldError::PatternMismatch(field, _)
            | FieldError::NotInAllowedValues(field, _)
            | FieldError::UnresolvedShape(field, _)
            | FieldError::DepthExceeded(field, _) => field,
        }
    }
}

/// The failure side of a validation: the shape that was checked and the
/// complete, ordered list of field errors. Never constructed empty.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[error("Input for shape '{shape}' failed validation with {} error(s)", .errors.len())]
pub struct ValidationFailure {
    /// Shape the input was validated against
    pub shape: String,

    /// Field errors, in field declaration order
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Create a failure from a non-empty error list
    pub fn new(shape: impl Into<String>, errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            shape: shape.into(),
            errors,
        }
    }

    /// Number of field errors (always at least one)
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors touching the given field path
    pub fn errors_for(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field() == field).collect()
    }
}
