//! Glue between `validator` derive output and [`CoreError`].

use validator::Validate;

use crate::error::CoreError;

/// Run the derived validation rules on `input`, mapping failures to
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))
}
