//! Registers the `author` input shape and validates a few sample inputs,
//! printing the validated record or the full error list for each.

use anyhow::Result;
use inputshape::{FieldKind, FieldSpec, SchemaError, ShapeRegistry};
use serde_json::{json, Value};

fn main() -> Result<()> {
    let mut registry = ShapeRegistry::new();
    registry.define(
        "author",
        vec![
            FieldSpec::required("name", FieldKind::String),
            FieldSpec::required("last_name", FieldKind::String),
        ],
    )?;

    let inputs: Vec<Value> = vec![
        json!({ "name": "Ada", "last_name": "Lovelace" }),
        json!({ "name": "Ada" }),
        json!({ "name": 42, "last_name": "Lovelace" }),
        json!({ "name": "Ada", "last_name": "Lovelace", "extra": true }),
    ];

    for input in &inputs {
        println!("input: {}", input);
        match registry.validate_input("author", input) {
            Ok(record) => {
                println!(
                    "  ok: name={:?} last_name={:?} ({} fields)",
                    record.get_str("name"),
                    record.get_str("last_name"),
                    record.len()
                );
            }
            Err(SchemaError::Validation(failure)) => {
                println!("  failed with {} error(s):", failure.len());
                for error in &failure.errors {
                    println!("    - {}", error);
                }
            }
            Err(other) => return Err(other.into()),
        }
    }

    Ok(())
}
