use crate::validator::ValidationFailure;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-level error type.
///
/// Registration-time variants (`DuplicateShapeName`, `UnknownShapeReference`,
/// `DuplicateFieldName`, `ShapeTooDeep`, `InvalidPattern`) and `UnknownShape`
/// signal misconfiguration and should be treated as fatal at startup rather
/// than recovered per-request. `Validation` carries the per-request error
/// list produced by the validator.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SchemaError {
    #[error("Duplicate shape name: {0}")]
    DuplicateShapeName(String),

    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Shape '{0}' references unknown shape '{1}'")]
    UnknownShapeReference(String, String),

    #[error("Duplicate field '{1}' in shape '{0}'")]
    DuplicateFieldName(String, String),

    #[error("Shape '{0}' nests deeper than {1} levels")]
    ShapeTooDeep(String, usize),

    #[error("Invalid pattern for field '{1}' in shape '{0}': {2}")]
    InvalidPattern(String, String, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Failed to access file {0}: {1}")]
    FileAccess(String, String),

    #[error("Serialization error: {0}")]
    SerializeError(String),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl From<serde_json::Error> for SchemaError {
    fn from(error: serde_json::Error) -> Self {
        SchemaError::ParseError(error.to_string())
    }
}
