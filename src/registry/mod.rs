pub mod shape_registry;

pub use shape_registry::ShapeRegistry;
