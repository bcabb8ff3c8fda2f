use crate::error::SchemaError;
use crate::shape::ShapeCatalog;
use log::{debug, error, info, warn};
use std::collections::HashSet;
use tokio::fs;

/// Shape catalog parser for JSON (and optionally YAML) documents.
pub struct ShapeParser;

impl ShapeParser {
    /// Parse a shape catalog from a JSON string
    pub fn from_json(json_str: &str) -> Result<ShapeCatalog, SchemaError> {
        Self::from_json_with_context(json_str, None)
    }

    /// Parse a shape catalog from a JSON string with file context
    pub fn from_json_with_context(
        json_str: &str,
        file_path: Option<&str>,
    ) -> Result<ShapeCatalog, SchemaError> {
        let context = file_path
            .map(|p| format!(" (file: {})", p))
            .unwrap_or_default();
        debug!(
            "Parsing shape catalog from JSON{} ({} bytes)",
            context,
            json_str.len()
        );

        if json_str.trim().is_empty() {
            error!("Shape catalog JSON string is empty{}", context);
            return Err(SchemaError::ParseError(format!(
                "JSON parsing error{}: input string is empty",
                context
            )));
        }

        match serde_json::from_str::<ShapeCatalog>(json_str) {
            Ok(catalog) => {
                info!("Parsed shape catalog from JSON{}", context);
                debug!(
                    "Catalog version {} with {} shapes",
                    catalog.version,
                    catalog.shapes.len()
                );
                Ok(catalog)
            }
            Err(e) => {
                error!("Failed to parse shape catalog{}: {}", context, e);
                let detailed_error = match e.classify() {
                    serde_json::error::Category::Syntax => format!(
                        "JSON parsing error{} - Syntax error at line {}, column {}: {}",
                        context,
                        e.line(),
                        e.column(),
                        e
                    ),
                    serde_json::error::Category::Data => format!(
                        "JSON parsing error{} - Invalid data structure: {}",
                        context, e
                    ),
                    serde_json::error::Category::Eof => format!(
                        "JSON parsing error{} - Unexpected end of file: {}",
                        context, e
                    ),
                    serde_json::error::Category::Io => {
                        format!("JSON parsing error{} - I/O issue: {}", context, e)
                    }
                };
                Err(SchemaError::ParseError(detailed_error))
            }
        }
    }

    /// Parse a shape catalog from a YAML string
    #[cfg(feature = "yaml-support")]
    pub fn from_yaml(yaml_str: &str) -> Result<ShapeCatalog, SchemaError> {
        if yaml_str.trim().is_empty() {
            return Err(SchemaError::ParseError(
                "YAML parsing error: input string is empty".to_string(),
            ));
        }

        serde_yaml::from_str::<ShapeCatalog>(yaml_str).map_err(|e| {
            error!("Failed to parse shape catalog from YAML: {}", e);
            SchemaError::ParseError(format!("YAML parsing error: {}", e))
        })
    }

    /// Load a shape catalog from a file (format detected from extension)
    pub async fn from_file(path: &str) -> Result<ShapeCatalog, SchemaError> {
        info!("Loading shape catalog from file: {}", path);

        if path.trim().is_empty() {
            error!("Shape catalog file path is empty");
            return Err(SchemaError::ParseError(
                "File path cannot be empty".to_string(),
            ));
        }

        match fs::metadata(path).await {
            Ok(metadata) => {
                debug!("File found: {} ({} bytes)", path, metadata.len());
                if metadata.len() == 0 {
                    warn!("Shape catalog file is empty: {}", path);
                }
            }
            Err(e) => {
                error!("Cannot access shape catalog file '{}': {}", path, e);
                return Err(SchemaError::FileAccess(path.to_string(), e.to_string()));
            }
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SchemaError::FileAccess(path.to_string(), e.to_string()))?;

        if path.ends_with(".yaml") || path.ends_with(".yml") {
            #[cfg(feature = "yaml-support")]
            {
                Self::from_yaml(&content)
            }
            #[cfg(not(feature = "yaml-support"))]
            {
                error!("YAML support not enabled for file: {}", path);
                Err(SchemaError::ParseError(format!(
                    "YAML support not enabled (file: {}). Enable 'yaml-support' feature.",
                    path
                )))
            }
        } else {
            Self::from_json_with_context(&content, Some(path))
        }
    }

    /// Serialize a shape catalog to a JSON string
    pub fn to_json(catalog: &ShapeCatalog) -> Result<String, SchemaError> {
        debug!("Serializing shape catalog to JSON");
        serde_json::to_string_pretty(catalog).map_err(|e| {
            error!("Failed to serialize shape catalog to JSON: {}", e);
            SchemaError::SerializeError(format!("JSON serialization error: {}", e))
        })
    }

    /// Serialize a shape catalog to a YAML string
    #[cfg(feature = "yaml-support")]
    pub fn to_yaml(catalog: &ShapeCatalog) -> Result<String, SchemaError> {
        debug!("Serializing shape catalog to YAML");
        serde_yaml::to_string(catalog).map_err(|e| {
            error!("Failed to serialize shape catalog to YAML: {}", e);
            SchemaError::SerializeError(format!("YAML serialization error: {}", e))
        })
    }

    /// Write a shape catalog to a file (format based on extension)
    pub async fn to_file(catalog: &ShapeCatalog, path: &str) -> Result<(), SchemaError> {
        let content = if path.ends_with(".yaml") || path.ends_with(".yml") {
            #[cfg(feature = "yaml-support")]
            {
                Self::to_yaml(catalog)?
            }
            #[cfg(not(feature = "yaml-support"))]
            {
                return Err(SchemaError::ParseError(
                    "YAML support not enabled. Enable 'yaml-support' feature.".to_string(),
                ));
            }
        } else {
            Self::to_json(catalog)?
        };

        fs::write(path, content)
            .await
            .map_err(|e| SchemaError::FileAccess(path.to_string(), e.to_string()))?;

        Ok(())
    }

    /// Structural checks on a catalog before registration: unique shape
    /// names plus each shape's own structure. Reference resolution happens
    /// at registration, where the already-registered set is known.
    pub fn validate(catalog: &ShapeCatalog) -> Result<(), SchemaError> {
        info!(
            "Validating shape catalog version {} ({} shapes)",
            catalog.version,
            catalog.shapes.len()
        );

        let mut seen = HashSet::new();
        for shape in &catalog.shapes {
            if !seen.insert(shape.name.as_str()) {
                return Err(SchemaError::DuplicateShapeName(shape.name.clone()));
            }
            shape.check_structure()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{FieldKind, FieldSpec, InputShape};

    fn sample_catalog() -> ShapeCatalog {
        let mut catalog = ShapeCatalog::new("1.0.0");
        catalog.add_shape(
            InputShape::new("author")
                .field(FieldSpec::required("name", FieldKind::String))
                .field(FieldSpec::required("last_name", FieldKind::String)),
        );
        catalog
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = sample_catalog();
        let json_str = ShapeParser::to_json(&catalog).unwrap();
        let parsed = ShapeParser::from_json(&json_str).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = ShapeParser::from_json("   ").unwrap_err();
        assert!(matches!(err, SchemaError::ParseError(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_shapes() {
        let mut catalog = sample_catalog();
        catalog.add_shape(InputShape::new("author"));

        let err = ShapeParser::validate(&catalog).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateShapeName("author".to_string()));
    }
}
