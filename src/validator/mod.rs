pub mod field_error;
pub mod input_validator;
pub mod validated_record;

pub use field_error::{FieldError, ValidationFailure};
pub use input_validator::{observed_kind, InputValidator, MAX_VALIDATION_DEPTH};
pub use validated_record::ValidatedRecord;
