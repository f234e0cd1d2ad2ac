//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures raised by the data model itself.
/// Values that are merely absent (an empty inventory, for example) are modelled
/// as `Option::None` and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative revision number).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A line source ran dry before a valid value was entered.
    #[error("input exhausted while waiting for: {0}")]
    InputExhausted(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn input_exhausted(prompt: impl Into<String>) -> Self {
        Self::InputExhausted(prompt.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("revision number cannot be negative (got -1)");
        assert_eq!(
            err.to_string(),
            "validation failed: revision number cannot be negative (got -1)"
        );
    }

    #[test]
    fn input_exhausted_names_the_prompt() {
        let err = DomainError::input_exhausted("Enter the name of product 3:");
        assert!(err.to_string().contains("Enter the name of product 3:"));
    }
}
