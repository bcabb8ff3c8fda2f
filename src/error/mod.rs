pub mod schema_error;

pub use schema_error::SchemaError;

pub type Result<T> = std::result::Result<T, SchemaError>;
