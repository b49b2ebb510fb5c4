//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (bad input).
/// Collaborator and storage failures carry their own error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was missing or empty.
    ///
    /// `param` names the offending parameter (e.g. `line_items`).
    #[error("invalid argument: {param} must not be empty")]
    InvalidArgument { param: &'static str },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_argument(param: &'static str) -> Self {
        Self::InvalidArgument { param }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_the_parameter() {
        let err = DomainError::invalid_argument("line_items");
        assert_eq!(
            err.to_string(),
            "invalid argument: line_items must not be empty"
        );
        assert_eq!(err, DomainError::InvalidArgument { param: "line_items" });
    }
}
