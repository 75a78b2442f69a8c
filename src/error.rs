//! Error type shared by every cipher engine and the dispatch layer.

use thiserror::Error;

/// Failures surfaced by the cipher library.
///
/// Only two kinds exist: `InvalidInput` covers everything a caller can fix
/// (unknown method, malformed or missing key, text that violates a cipher's
/// contract), while `Internal` covers faults that should never happen on
/// valid input and carries no internal state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for an `InvalidInput` built from a displayable message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Re-wraps the message with an operation/method prefix, preserving the
    /// error kind. Used by the dispatch layer.
    pub(crate) fn with_context(self, op: &str, method: &str) -> Self {
        match self {
            Error::InvalidInput(msg) => {
                Error::InvalidInput(format!("{op} failed with {method}: {msg}"))
            }
            Error::Internal(msg) => Error::Internal(format!("{op} failed with {method}: {msg}")),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::invalid("rails must be at least 2");
        assert_eq!(e.to_string(), "rails must be at least 2");

        let e = Error::Internal("grid underflow".to_string());
        assert_eq!(e.to_string(), "internal error: grid underflow");
    }

    #[test]
    fn test_with_context() {
        let e = Error::invalid("key must be an integer").with_context("encryption", "shift");
        assert_eq!(
            e,
            Error::InvalidInput("encryption failed with shift: key must be an integer".to_string())
        );
    }

    #[test]
    fn test_internal_keeps_kind_through_context() {
        let e = Error::Internal("rail band exhausted".to_string())
            .with_context("decryption", "rail_fence");
        assert!(matches!(e, Error::Internal(_)));
        assert_eq!(
            e.to_string(),
            "internal error: decryption failed with rail_fence: rail band exhausted"
        );
    }
}
