//! Domain error types.

use std::fmt::Display;

use thiserror::Error;

/// Errors that can occur during domain operations.
///
/// Every fallible aggregate operation returns one of three kinds:
/// input that fails a format or range rule ([`DomainError::Validation`]),
/// an operation the aggregate's current state forbids
/// ([`DomainError::BusinessRule`]), or a reference to a child entity that
/// does not exist ([`DomainError::NotFound`]). Callers can branch on the
/// kind without parsing the message.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed a structural or range check before any state changed.
    #[error("{0}")]
    Validation(String),

    /// The aggregate's current state does not permit the operation.
    #[error("{0}")]
    BusinessRule(String),

    /// A referenced entity does not exist within the aggregate.
    #[error("{entity} with identifier '{id}' was not found.")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a business rule error.
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRule(message.into())
    }

    /// Creates a not-found error for an entity and its identifier.
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a business rule error.
    pub fn is_business_rule(&self) -> bool {
        matches!(self, Self::BusinessRule(_))
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Validates that a string has non-whitespace content and returns it trimmed.
pub(crate) fn require_text(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
