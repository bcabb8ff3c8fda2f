use crate::error::SchemaError;
use crate::shape::{ConstraintSpec, FieldSpec};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum list-nesting depth a shape definition may declare.
pub const MAX_SHAPE_DEPTH: usize = 16;

/// A named, immutable input shape: an ordered set of field specs.
///
/// Field order is semantically irrelevant but preserved so diagnostics come
/// out in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputShape {
    /// Shape name (unique within a registry)
    pub name: String,

    /// Shape description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Field definitions, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl InputShape {
    /// Create a new shape with no fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Create a shape from a field list
    pub fn with_fields(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields,
        }
    }

    /// Add description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field (builder style)
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Append a field
    pub fn add_field(&mut self, spec: FieldSpec) {
        self.fields.push(spec);
    }

    /// Look up a field by name
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of required fields, in declaration order
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Names of optional fields, in declaration order
    pub fn optional_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.is_required())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Structural checks on the definition itself (not on input values):
    /// unique field names, bounded list nesting, compilable patterns.
    pub fn check_structure(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName(
                    self.name.clone(),
                    field.name.clone(),
                ));
            }

            if field.kind.nesting_depth() > MAX_SHAPE_DEPTH {
                return Err(SchemaError::ShapeTooDeep(self.name.clone(), MAX_SHAPE_DEPTH));
            }

            if let Some(ConstraintSpec {
                pattern: Some(pattern),
                ..
            }) = &field.constraints
            {
                if let Err(e) = Regex::new(pattern) {
                    return Err(SchemaError::InvalidPattern(
                        self.name.clone(),
                        field.name.clone(),
                        e.to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// A versioned set of shape definitions, loadable from a catalog file.
///
/// Shapes that reference other shapes must be declared after their
/// referents, so a catalog can be registered front to back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShapeCatalog {
    /// Catalog format version
    pub version: String,

    /// Shape definitions, in registration order
    #[serde(default)]
    pub shapes: Vec<InputShape>,
}

impl ShapeCatalog {
    /// Create an empty catalog
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            shapes: Vec::new(),
        }
    }

    /// Append a shape definition
    pub fn add_shape(&mut self, shape: InputShape) {
        self.shapes.push(shape);
    }

    /// Look up a shape by name
    pub fn get_shape(&self, name: &str) -> Option<&InputShape> {
        self.shapes.iter().find(|s| s.name == name)
    }
}
