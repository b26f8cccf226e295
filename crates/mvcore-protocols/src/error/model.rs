//! Model-related errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Proxy already registered: {0}")]
    AlreadyRegistered(String),
}

impl ModelError {
    /// Shorthand for an empty-name rejection on the given parameter.
    pub fn empty(what: &str) -> Self {
        ModelError::InvalidArgument(format!("{} must not be empty", what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = ModelError::InvalidArgument("proxy name must not be empty".to_string());
        let display = err.to_string();
        assert!(display.contains("Invalid argument"));
        assert!(display.contains("proxy name"));
    }

    #[test]
    fn test_already_registered_error() {
        let err = ModelError::AlreadyRegistered("colors".to_string());
        let display = err.to_string();
        assert!(display.contains("already registered"));
        assert!(display.contains("colors"));
    }

    #[test]
    fn test_empty_helper() {
        let err = ModelError::empty("core key");
        assert_eq!(
            err,
            ModelError::InvalidArgument("core key must not be empty".to_string())
        );
    }

    #[test]
    fn test_error_debug() {
        let err = ModelError::AlreadyRegistered("test".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("AlreadyRegistered"));
    }
}
