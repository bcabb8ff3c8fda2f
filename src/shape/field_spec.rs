use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of value kinds a field can declare.
///
/// `Shape` references another registered shape by name; `List` wraps an
/// element kind and may nest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    /// UTF-8 textual scalar
    String,
    /// Exactly integral number (floats are rejected)
    Integer,
    /// Boolean
    Boolean,
    /// Any numeric value (integral literals accepted)
    Float,
    /// Reference to another registered shape
    Shape {
        /// Name of the referenced shape
        shape: String,
    },
    /// Homogeneous list of a single element kind
    List {
        /// Element kind (boxed to allow nesting)
        element: Box<FieldKind>,
    },
}

impl FieldKind {
    /// Kind name used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Float => "float",
            FieldKind::Shape { .. } => "object",
            FieldKind::List { .. } => "list",
        }
    }

    /// Create a shape-reference kind
    pub fn shape_ref(name: impl Into<String>) -> Self {
        FieldKind::Shape { shape: name.into() }
    }

    /// Create a list kind
    pub fn list_of(element: FieldKind) -> Self {
        FieldKind::List {
            element: Box::new(element),
        }
    }

    /// Nesting depth contributed by this kind (lists nest, scalars don't)
    pub fn nesting_depth(&self) -> usize {
        match self {
            FieldKind::List { element } => 1 + element.nesting_depth(),
            _ => 0,
        }
    }

    /// Innermost shape reference, if any, walking through list wrappers
    pub fn shape_reference(&self) -> Option<&str> {
        match self {
            FieldKind::Shape { shape } => Some(shape),
            FieldKind::List { element } => element.shape_reference(),
            _ => None,
        }
    }
}

/// Value constraints attached to a field beyond its kind.
///
/// All constraints are optional; an empty constraint set accepts any value
/// of the declared kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstraintSpec {
    /// Minimum length for strings/lists (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum length for strings/lists (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Regular expression pattern for strings (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Minimum value for numbers (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Maximum value for numbers (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Enumerated allowed values (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,
}

impl ConstraintSpec {
    /// Create an empty constraint set
    pub fn new() -> Self {
        Self {
            min_length: None,
            max_length: None,
            pattern: None,
            minimum: None,
            maximum: None,
            allowed_values: None,
        }
    }

    /// Set length constraints
    pub fn with_length_range(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Set numeric range constraints
    pub fn with_numeric_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.minimum = min;
        self.maximum = max;
        self
    }

    /// Set pattern constraint
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set enumerated allowed values
    pub fn with_allowed_values(mut self, values: Vec<Value>) -> Self {
        self.allowed_values = Some(values);
        self
    }
}

impl Default for ConstraintSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// One field of an input shape: name, kind, required flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSpec {
    /// Field name (unique within its shape)
    pub name: String,

    /// Declared value kind
    #[serde(flatten)]
    pub kind: FieldKind,

    /// Whether the field must be present (default: false)
    #[serde(default)]
    pub required: bool,

    /// Field description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Value constraints (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ConstraintSpec>,
}

impl FieldSpec {
    /// Create a new optional field
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            description: None,
            constraints: None,
        }
    }

    /// Create a required field
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self::new(name, kind).as_required()
    }

    /// Create an optional field
    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self::new(name, kind)
    }

    /// Mark as required
    pub fn as_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as optional
    pub fn as_optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Add description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add value constraints
    pub fn with_constraints(mut self, constraints: ConstraintSpec) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Check if field is required
    pub fn is_required(&self) -> bool {
        self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_spec_builder() {
        let field = FieldSpec::required("name", FieldKind::String)
            .with_description("Author given name")
            .with_constraints(
                ConstraintSpec::new()
                    .with_length_range(Some(1), Some(100))
                    .with_pattern("^[a-zA-Z]+$"),
            );

        assert_eq!(field.name, "name");
        assert_eq!(field.kind, FieldKind::String);
        assert!(field.is_required());
        assert_eq!(field.description, Some("Author given name".to_string()));
        assert!(field.constraints.is_some());
    }

    #[test]
    fn test_constraint_spec_builder() {
        let constraints = ConstraintSpec::new()
            .with_length_range(Some(5), Some(50))
            .with_numeric_range(Some(0.0), Some(100.0))
            .with_pattern("^test.*")
            .with_allowed_values(vec![json!("option1"), json!("option2")]);

        assert_eq!(constraints.min_length, Some(5));
        assert_eq!(constraints.max_length, Some(50));
        assert_eq!(constraints.minimum, Some(0.0));
        assert_eq!(constraints.maximum, Some(100.0));
        assert!(constraints.pattern.is_some());
        assert!(constraints.allowed_values.is_some());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FieldKind::String.kind_name(), "string");
        assert_eq!(FieldKind::Integer.kind_name(), "integer");
        assert_eq!(FieldKind::Boolean.kind_name(), "boolean");
        assert_eq!(FieldKind::Float.kind_name(), "float");
        assert_eq!(FieldKind::shape_ref("address").kind_name(), "object");
        assert_eq!(FieldKind::list_of(FieldKind::String).kind_name(), "list");
    }

    #[test]
    fn test_nesting_depth() {
        assert_eq!(FieldKind::String.nesting_depth(), 0);
        assert_eq!(FieldKind::list_of(FieldKind::String).nesting_depth(), 1);
        assert_eq!(
            FieldKind::list_of(FieldKind::list_of(FieldKind::Integer)).nesting_depth(),
            2
        );
    }

    #[test]
    fn test_shape_reference_through_lists() {
        let kind = FieldKind::list_of(FieldKind::shape_ref("tag"));
        assert_eq!(kind.shape_reference(), Some("tag"));
        assert_eq!(FieldKind::Boolean.shape_reference(), None);
    }

    #[test]
    fn test_field_kind_serde_tagging() {
        let field = FieldSpec::required("tags", FieldKind::list_of(FieldKind::String));
        let json_str = serde_json::to_string(&field).unwrap();
        let parsed: FieldSpec = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed, field);
        assert!(json_str.contains("\"kind\":\"list\""));
    }
}
