use crate::registry::ShapeRegistry;
use crate::shape::{ConstraintSpec, FieldKind, InputShape};
use crate::validator::{FieldError, ValidatedRecord, ValidationFailure};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Maximum nesting depth accepted in an input value. Registered shapes can
/// never require deeper inputs; anything beyond this is adversarial.
pub const MAX_VALIDATION_DEPTH: usize = 32;

/// Field path used when the input value itself is not an object.
const ROOT_FIELD: &str = "$root";

/// Checks untyped input values against registered shapes.
///
/// Pure and synchronous: each call reads only its arguments and the
/// immutable registry, so concurrent calls need no coordination.
pub struct InputValidator<'a> {
    registry: &'a ShapeRegistry,
}

impl<'a> InputValidator<'a> {
    /// Create a validator backed by the given registry
    pub fn new(registry: &'a ShapeRegistry) -> Self {
        Self { registry }
    }

    /// Validate an input value against a shape.
    ///
    /// Returns a [`ValidatedRecord`] holding exactly the shape's required
    /// fields plus present-and-valid optional fields, or a
    /// [`ValidationFailure`] carrying every field error found. Extra input
    /// keys not declared by the shape are ignored and pruned at every
    /// nesting level, so they never reach the output record. Never
    /// short-circuits on the first error.
    pub fn validate(
        &self,
        shape: &InputShape,
        value: &Value,
    ) -> Result<ValidatedRecord, ValidationFailure> {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => {
                return Err(ValidationFailure::new(
                    shape.name.as_str(),
                    vec![FieldError::TypeMismatch(
                        ROOT_FIELD.to_string(),
                        "object".to_string(),
                        observed_kind(value).to_string(),
                    )],
                ));
            }
        };

        let mut errors = Vec::new();
        let mut fields = HashMap::new();

        for spec in &shape.fields {
            match obj.get(&spec.name) {
                Some(field_value) => {
                    let before = errors.len();
                    let checked = self.check_value(
                        field_value,
                        &spec.kind,
                        spec.constraints.as_ref(),
                        &spec.name,
                        0,
                        &mut errors,
                    );
                    if errors.len() == before {
                        if let Some(checked_value) = checked {
                            fields.insert(spec.name.clone(), checked_value);
                        }
                    }
                }
                None => {
                    if spec.is_required() {
                        errors.push(FieldError::MissingField(spec.name.clone()));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(ValidatedRecord::new(shape.name.as_str(), fields))
        } else {
            Err(ValidationFailure::new(shape.name.as_str(), errors))
        }
    }

    /// Check one value against a declared kind, collecting errors.
    ///
    /// Returns the checked value with undeclared keys pruned at every
    /// level, or `None` when the value's kind is wrong. Callers only keep
    /// the result when no errors were added for the field.
    fn check_value(
        &self,
        value: &Value,
        kind: &FieldKind,
        constraints: Option<&ConstraintSpec>,
        path: &str,
        depth: usize,
        errors: &mut Vec<FieldError>,
    ) -> Option<Value> {
        if depth > MAX_VALIDATION_DEPTH {
            errors.push(FieldError::DepthExceeded(
                path.to_string(),
                MAX_VALIDATION_DEPTH,
            ));
            return None;
        }

        let checked = match kind {
            FieldKind::String => {
                let Some(text) = value.as_str() else {
                    errors.push(self.mismatch(path, kind, value));
                    return None;
                };
                self.check_string_constraints(text, constraints, path, errors);
                value.clone()
            }
            FieldKind::Integer => {
                // Exact kind: a float literal is not an integer
                if !value.is_i64() && !value.is_u64() {
                    errors.push(self.mismatch(path, kind, value));
                    return None;
                }
                self.check_numeric_constraints(value.as_f64(), constraints, path, errors);
                value.clone()
            }
            FieldKind::Boolean => {
                if !value.is_boolean() {
                    errors.push(self.mismatch(path, kind, value));
                    return None;
                }
                value.clone()
            }
            FieldKind::Float => {
                // Integral literals are acceptable floats
                if !value.is_number() {
                    errors.push(self.mismatch(path, kind, value));
                    return None;
                }
                self.check_numeric_constraints(value.as_f64(), constraints, path, errors);
                value.clone()
            }
            FieldKind::Shape { shape } => {
                // Allowed-value sets apply to scalars and lists, not objects
                return self.check_shape_ref(value, shape, path, depth, errors);
            }
            FieldKind::List { element } => {
                let Some(items) = value.as_array() else {
                    errors.push(self.mismatch(path, kind, value));
                    return None;
                };
                self.check_list_constraints(items.len(), constraints, path, errors);
                let mut pruned = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, index);
                    if let Some(checked_item) =
                        self.check_value(item, element, None, &item_path, depth + 1, errors)
                    {
                        pruned.push(checked_item);
                    }
                }
                Value::Array(pruned)
            }
        };

        if let Some(ConstraintSpec {
            allowed_values: Some(allowed),
            ..
        }) = constraints
        {
            if !allowed.contains(value) {
                let allowed_strings: Vec<String> = allowed.iter().map(|v| v.to_string()).collect();
                errors.push(FieldError::NotInAllowedValues(
                    path.to_string(),
                    allowed_strings.join(", "),
                ));
            }
        }

        Some(checked)
    }

    /// Resolve a shape reference and validate the nested object against it.
    ///
    /// Returns the nested object rebuilt from its declared fields only, so
    /// undeclared keys are dropped at every nesting level.
    fn check_shape_ref(
        &self,
        value: &Value,
        shape_name: &str,
        path: &str,
        depth: usize,
        errors: &mut Vec<FieldError>,
    ) -> Option<Value> {
        let Some(nested_shape) = self.registry.get(shape_name) else {
            errors.push(FieldError::UnresolvedShape(
                path.to_string(),
                shape_name.to_string(),
            ));
            return None;
        };

        let Some(obj) = value.as_object() else {
            errors.push(FieldError::TypeMismatch(
                path.to_string(),
                "object".to_string(),
                observed_kind(value).to_string(),
            ));
            return None;
        };

        let mut pruned = serde_json::Map::new();
        for spec in &nested_shape.fields {
            let field_path = format!("{}.{}", path, spec.name);
            match obj.get(&spec.name) {
                Some(field_value) => {
                    let before = errors.len();
                    let checked = self.check_value(
                        field_value,
                        &spec.kind,
                        spec.constraints.as_ref(),
                        &field_path,
                        depth + 1,
                        errors,
                    );
                    if errors.len() == before {
                        if let Some(checked_value) = checked {
                            pruned.insert(spec.name.clone(), checked_value);
                        }
                    }
                }
                None => {
                    if spec.is_required() {
                        errors.push(FieldError::MissingField(field_path));
                    }
                }
            }
        }

        Some(Value::Object(pruned))
    }

    fn check_string_constraints(
        &self,
        text: &str,
        constraints: Option<&ConstraintSpec>,
        path: &str,
        errors: &mut Vec<FieldError>,
    ) {
        let Some(constraints) = constraints else {
            return;
        };

        if let Some(min_length) = constraints.min_length {
            if text.len() < min_length {
                errors.push(FieldError::LengthOutOfRange(
                    path.to_string(),
                    format!("{} < minimum length {}", text.len(), min_length),
                ));
            }
        }

        if let Some(max_length) = constraints.max_length {
            if text.len() > max_length {
                errors.push(FieldError::LengthOutOfRange(
                    path.to_string(),
                    format!("{} > maximum length {}", text.len(), max_length),
                ));
            }
        }

        if let Some(pattern) = &constraints.pattern {
            match Regex::new(pattern) {
                Ok(regex) => {
                    if !regex.is_match(text) {
                        errors.push(FieldError::PatternMismatch(
                            path.to_string(),
                            pattern.clone(),
                        ));
                    }
                }
                Err(_) => {
                    // Registered shapes can't reach here; hand-built ones can
                    errors.push(FieldError::PatternMismatch(
                        path.to_string(),
                        format!("invalid pattern '{}'", pattern),
                    ));
                }
            }
        }
    }

    fn check_numeric_constraints(
        &self,
        value: Option<f64>,
        constraints: Option<&ConstraintSpec>,
        path: &str,
        errors: &mut Vec<FieldError>,
    ) {
        let (Some(number), Some(constraints)) = (value, constraints) else {
            return;
        };

        if let Some(minimum) = constraints.minimum {
            if number < minimum {
                errors.push(FieldError::ValueOutOfRange(
                    path.to_string(),
                    format!("{} < minimum {}", number, minimum),
                ));
            }
        }

        if let Some(maximum) = constraints.maximum {
            if number > maximum {
                errors.push(FieldError::ValueOutOfRange(
                    path.to_string(),
                    format!("{} > maximum {}", number, maximum),
                ));
            }
        }
    }

    fn check_list_constraints(
        &self,
        length: usize,
        constraints: Option<&ConstraintSpec>,
        path: &str,
        errors: &mut Vec<FieldError>,
    ) {
        let Some(constraints) = constraints else {
            return;
        };

        if let Some(min_length) = constraints.min_length {
            if length < min_length {
                errors.push(FieldError::LengthOutOfRange(
                    path.to_string(),
                    format!("{} < minimum length {}", length, min_length),
                ));
            }
        }

        if let Some(max_length) = constraints.max_length {
            if length > max_length {
                errors.push(FieldError::LengthOutOfRange(
                    path.to_string(),
                    format!("{} > maximum length {}", length, max_length),
                ));
            }
        }
    }

    fn mismatch(&self, path: &str, expected: &FieldKind, value: &Value) -> FieldError {
        FieldError::TypeMismatch(
            path.to_string(),
            expected.kind_name().to_string(),
            observed_kind(value).to_string(),
        )
    }
}

/// Kind name observed for a JSON value, as reported in error messages.
pub fn observed_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_observed_kind_names() {
        assert_eq!(observed_kind(&json!(null)), "null");
        assert_eq!(observed_kind(&json!(true)), "boolean");
        assert_eq!(observed_kind(&json!(42)), "integer");
        assert_eq!(observed_kind(&json!(4.2)), "float");
        assert_eq!(observed_kind(&json!("x")), "string");
        assert_eq!(observed_kind(&json!([])), "list");
        assert_eq!(observed_kind(&json!({})), "object");
    }
}
