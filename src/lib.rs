//! # inputshape
//!
//! Typed input-shape definition and validation for structured API inputs.
//! Declare named shapes (typed, required/optional fields) once at startup,
//! then validate untyped caller-supplied values against them, getting back
//! either a checked record or the complete list of field errors.
//!
//! ## Features
//!
//! - **Write-once registry**: shapes are registered during startup and
//!   immutable afterwards, so concurrent validation needs no locking
//! - **Complete error reporting**: every field error is collected, never
//!   just the first one
//! - **Permissive inputs**: unknown keys are dropped, not rejected, so
//!   forward-compatible clients keep working
//! - **Shape catalogs**: JSON (optionally YAML) documents holding a set of
//!   shape definitions
//!
//! ## Quick Start
//!
//! ```rust
//! use inputshape::{FieldKind, FieldSpec, ShapeRegistry};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = ShapeRegistry::new();
//!     registry.define(
//!         "author",
//!         vec![
//!             FieldSpec::required("name", FieldKind::String),
//!             FieldSpec::required("last_name", FieldKind::String),
//!         ],
//!     )?;
//!
//!     let record = registry.validate_input(
//!         "author",
//!         &json!({ "name": "Ada", "last_name": "Lovelace" }),
//!     )?;
//!
//!     assert_eq!(record.get_str("name"), Some("Ada"));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod registry;
pub mod shape;
pub mod validator;

// Shape model exports (definition layer)
pub use shape::{
    ConstraintSpec, FieldKind, FieldSpec, InputShape, ShapeCatalog, ShapeParser, MAX_SHAPE_DEPTH,
};

// Registry exports
pub use registry::ShapeRegistry;

// Validator exports
pub use validator::{
    observed_kind, FieldError, InputValidator, ValidatedRecord, ValidationFailure,
    MAX_VALIDATION_DEPTH,
};

// Error exports
pub use error::SchemaError;

// Result type alias
pub type Result<T> = std::result::Result<T, SchemaError>;

// Re-export common dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value as JsonValue};

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        ConstraintSpec, FieldError, FieldKind, FieldSpec, InputShape, InputValidator, JsonValue,
        Result, SchemaError, ShapeCatalog, ShapeParser, ShapeRegistry, ValidatedRecord,
        ValidationFailure,
    };
    pub use serde_json::json;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
