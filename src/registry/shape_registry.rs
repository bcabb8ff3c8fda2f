use crate::error::SchemaError;
use crate::shape::{FieldSpec, InputShape, ShapeCatalog};
use crate::validator::{InputValidator, ValidatedRecord};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashMap;

/// Process-wide registry of input shapes.
///
/// Populated once during startup and read-only afterwards: shapes go from
/// *unregistered* to *registered* and never change again, so concurrent
/// reads need no synchronization. Registration failures are
/// misconfiguration and should abort startup.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, InputShape>,
}

impl ShapeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
        }
    }

    /// Register a shape.
    ///
    /// Fails on a duplicate name, a structurally invalid definition, or a
    /// field referencing a shape that is not yet registered. References are
    /// resolved here so validation-time lookups cannot fail; shapes must
    /// therefore be registered referents-first.
    pub fn define_shape(&mut self, shape: InputShape) -> crate::Result<()> {
        if self.shapes.contains_key(&shape.name) {
            return Err(SchemaError::DuplicateShapeName(shape.name));
        }

        shape.check_structure()?;

        for field in &shape.fields {
            if let Some(referenced) = field.kind.shape_reference() {
                if !self.shapes.contains_key(referenced) {
                    return Err(SchemaError::UnknownShapeReference(
                        shape.name.clone(),
                        referenced.to_string(),
                    ));
                }
            }
        }

        debug!(
            "Registered shape '{}' ({} fields, {} required)",
            shape.name,
            shape.fields.len(),
            shape.required_fields().len()
        );
        self.shapes.insert(shape.name.clone(), shape);
        Ok(())
    }

    /// Register a shape from a name and field list
    pub fn define(&mut self, name: impl Into<String>, fields: Vec<FieldSpec>) -> crate::Result<()> {
        self.define_shape(InputShape::with_fields(name, fields))
    }

    /// Register every shape in a catalog, in declaration order
    pub fn load_catalog(&mut self, catalog: &ShapeCatalog) -> crate::Result<()> {
        info!(
            "Loading shape catalog version {} ({} shapes)",
            catalog.version,
            catalog.shapes.len()
        );
        for shape in &catalog.shapes {
            self.define_shape(shape.clone())?;
        }
        Ok(())
    }

    /// Look up a shape by name
    pub fn get(&self, name: &str) -> Option<&InputShape> {
        self.shapes.get(name)
    }

    /// Whether a shape is registered
    pub fn has_shape(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Registered shape names (unordered)
    pub fn shape_names(&self) -> Vec<&str> {
        self.shapes.keys().map(String::as_str).collect()
    }

    /// Number of registered shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Validate an input value against a registered shape.
    ///
    /// `UnknownShape` means the call site asked for a shape that was never
    /// registered; validation failures carry the full field error list.
    pub fn validate_input(&self, shape_name: &str, value: &Value) -> crate::Result<ValidatedRecord> {
        let shape = self
            .get(shape_name)
            .ok_or_else(|| SchemaError::UnknownShape(shape_name.to_string()))?;

        InputValidator::new(self)
            .validate(shape, value)
            .map_err(SchemaError::from)
    }
}
