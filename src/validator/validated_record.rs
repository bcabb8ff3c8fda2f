use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// The success side of a validation: field values guaranteed to satisfy
/// every field spec of the shape they were checked against.
///
/// Contains exactly the shape's required fields plus any optional fields
/// that were present and valid; extra input keys never appear here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidatedRecord {
    shape: String,
    fields: HashMap<String, Value>,
}

impl ValidatedRecord {
    pub(crate) fn new(shape: impl Into<String>, fields: HashMap<String, Value>) -> Self {
        Self {
            shape: shape.into(),
            fields,
        }
    }

    /// Name of the shape this record was validated against
    pub fn shape_name(&self) -> &str {
        &self.shape
    }

    /// Raw field value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// String field value
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Integer field value
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(Value::as_i64)
    }

    /// Boolean field value
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.fields.get(name).and_then(Value::as_bool)
    }

    /// Float field value
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(Value::as_f64)
    }

    /// Whether the record holds the given field
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names present in the record
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Consume the record, yielding its field map
    pub fn into_fields(self) -> HashMap<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> ValidatedRecord {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), json!("Ada"));
        fields.insert("last_name".to_string(), json!("Lovelace"));
        fields.insert("birth_year".to_string(), json!(1815));
        ValidatedRecord::new("author", fields)
    }

    #[test]
    fn test_typed_accessors() {
        let record = sample_record();
        assert_eq!(record.shape_name(), "author");
        assert_eq!(record.get_str("name"), Some("Ada"));
        assert_eq!(record.get_i64("birth_year"), Some(1815));
        assert_eq!(record.get_bool("name"), None);
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_field_inventory() {
        let record = sample_record();
        assert_eq!(record.len(), 3);
        assert!(!record.is_empty());
        assert!(record.contains_field("last_name"));
        assert!(!record.contains_field("extra"));

        let fields = record.into_fields();
        assert_eq!(fields.get("name"), Some(&json!("Ada")));
    }
}
