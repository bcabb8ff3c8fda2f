pub mod field_spec;
pub mod input_shape;
pub mod shape_parser;

pub use field_spec::{ConstraintSpec, FieldKind, FieldSpec};
pub use input_shape::{InputShape, ShapeCatalog, MAX_SHAPE_DEPTH};
pub use shape_parser::ShapeParser;
