use inputshape::*;
use serde_json::json;
use test_utils::*;

/// Shape Parser Tests - catalog JSON parsing, file round-trips, validation

#[test]
fn test_json_round_trip_preserves_catalog() {
    init_test_logging();
    let catalog = create_test_catalog();
    let json_str = ShapeParser::to_json(&catalog).unwrap();

    let parsed = ShapeParser::from_json(&json_str).unwrap();
    assert_eq!(parsed, catalog);
    assert_eq!(parsed.version, "1.0.0");
    assert_eq!(parsed.shapes.len(), 1);
}

#[test]
fn test_parse_catalog_from_literal_json() {
    let catalog = ShapeParser::from_json(
        r#"{
            "version": "1.0.0",
            "shapes": [
                {
                    "name": "author",
                    "fields": [
                        { "name": "name", "kind": "string", "required": true },
                        { "name": "last_name", "kind": "string", "required": true },
                        { "name": "birth_year", "kind": "integer" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let shape = catalog.get_shape("author").unwrap();
    assert_eq!(shape.required_fields(), vec!["name", "last_name"]);
    assert_eq!(shape.optional_fields(), vec!["birth_year"]);
}

#[test]
fn test_parse_list_and_reference_kinds() {
    let catalog = ShapeParser::from_json(
        r#"{
            "version": "1.0.0",
            "shapes": [
                {
                    "name": "post",
                    "fields": [
                        { "name": "tags", "kind": "list", "element": { "kind": "string" } },
                        { "name": "author", "kind": "shape", "shape": "author", "required": true }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let shape = catalog.get_shape("post").unwrap();
    assert_eq!(
        shape.get_field("tags").unwrap().kind,
        FieldKind::list_of(FieldKind::String)
    );
    assert_eq!(
        shape.get_field("author").unwrap().kind,
        FieldKind::shape_ref("author")
    );
}

#[test]
fn test_parse_invalid_json_fails() {
    let result = ShapeParser::from_json(r#"{"version": 1.0.0, "shapes": []}"#);
    assert!(matches!(result, Err(SchemaError::ParseError(_))));
}

#[test]
fn test_parse_missing_version_fails() {
    let result = ShapeParser::from_json(r#"{"shapes": []}"#);
    assert!(matches!(result, Err(SchemaError::ParseError(_))));
}

#[test]
fn test_parse_empty_string_fails() {
    assert!(matches!(
        ShapeParser::from_json(""),
        Err(SchemaError::ParseError(_))
    ));
}

#[test]
fn test_empty_catalog_parses() {
    let catalog = ShapeParser::from_json(r#"{"version": "1.0.0", "shapes": []}"#).unwrap();
    assert!(catalog.shapes.is_empty());
}

#[tokio::test]
async fn test_file_round_trip() {
    init_test_logging();
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("shapes.json");
    let path_str = path.to_str().unwrap();

    let catalog = create_test_catalog();
    ShapeParser::to_file(&catalog, path_str).await.unwrap();

    let loaded = ShapeParser::from_file(path_str).await.unwrap();
    assert_eq!(loaded, catalog);
}

#[tokio::test]
async fn test_missing_file_reports_access_error() {
    let result = ShapeParser::from_file("/nonexistent/shapes.json").await;
    assert!(matches!(result, Err(SchemaError::FileAccess(_, _))));
}

#[tokio::test]
async fn test_empty_path_rejected() {
    let result = ShapeParser::from_file("").await;
    assert!(matches!(result, Err(SchemaError::ParseError(_))));
}

#[test]
fn test_validate_catches_duplicate_shape_names() {
    let mut catalog = create_test_catalog();
    catalog.add_shape(InputShape::new("author"));

    let err = ShapeParser::validate(&catalog).unwrap_err();
    assert_eq!(err, SchemaError::DuplicateShapeName("author".to_string()));
}

#[test]
fn test_validate_catches_structural_problems() {
    let mut catalog = ShapeCatalog::new("1.0.0");
    catalog.add_shape(
        InputShape::new("dup")
            .field(FieldSpec::required("x", FieldKind::String))
            .field(FieldSpec::optional("x", FieldKind::Integer)),
    );

    assert!(matches!(
        ShapeParser::validate(&catalog),
        Err(SchemaError::DuplicateFieldName(_, _))
    ));
}

#[test]
fn test_parsed_catalog_drives_validation_end_to_end() {
    let catalog = ShapeParser::from_json(
        r#"{
            "version": "1.0.0",
            "shapes": [
                {
                    "name": "author",
                    "fields": [
                        { "name": "name", "kind": "string", "required": true },
                        { "name": "last_name", "kind": "string", "required": true }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let mut registry = ShapeRegistry::new();
    registry.load_catalog(&catalog).unwrap();

    let record = registry
        .validate_input("author", &json!({ "name": "Ada", "last_name": "Lovelace" }))
        .unwrap();
    assert_eq!(record.get_str("last_name"), Some("Lovelace"));
}
