//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure here is deterministic and raised synchronously while a domain
/// value is being constructed. Nothing is retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument supplied for `field` broke one of its construction rules.
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Name of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::InvalidArgument { field, .. } => Some(field),
            DomainError::InvalidId(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_renders_field_and_reason() {
        let err = DomainError::invalid_argument("age", "must not be negative");
        assert_eq!(err.to_string(), "invalid argument `age`: must not be negative");
        assert_eq!(err.field(), Some("age"));
    }

    #[test]
    fn invalid_id_has_no_field() {
        let err = DomainError::invalid_id("PersonId: not a number");
        assert_eq!(err.field(), None);
        assert!(err.to_string().starts_with("invalid identifier"));
    }
}
