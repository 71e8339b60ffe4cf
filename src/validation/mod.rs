//! Validation of pricing inputs.

mod validate;

pub use validate::{validate_combo_request, validate_service, ValidationResult};
