// models/src/errors.rs

pub use thiserror::Error;

/// Local, pre-network validation failures. None of these ever reach the API.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// The pharmacy order form was submitted without any prescription checked.
    #[error("Please select at least one item to order.")]
    NoItemsSelected,
    /// A required form field was left blank.
    #[error("{0} is required.")]
    MissingField(&'static str),
    /// The appointment date/time could not be read as a local datetime.
    #[error("invalid appointment time: {0}")]
    InvalidAppointmentTime(String),
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fails with [`ValidationError::MissingField`] when `value` is blank.
pub fn require(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_blank_fields() {
        assert_eq!(require("Email", "   "), Err(ValidationError::MissingField("Email")));
        assert_eq!(require("Email", "a@b.c"), Ok(()));
    }

    #[test]
    fn should_describe_empty_selection() {
        assert_eq!(
            ValidationError::NoItemsSelected.to_string(),
            "Please select at least one item to order."
        );
    }
}
