//! Error types for fetsch helpers
//!
//! The core helpers never fail. These errors come from the stricter entry points:
//! identifier validation, strict statement-kind parsing and mapping construction.

use thiserror::Error;

/// Errors that can occur in the fallible helpers
#[derive(Debug, Error)]
pub enum FetschError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Unknown statement kind: {0}")]
    UnknownStatementKind(String),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetschError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn unknown_statement_kind(msg: impl Into<String>) -> Self {
        Self::UnknownStatementKind(msg.into())
    }

    pub fn not_an_object(msg: impl Into<String>) -> Self {
        Self::NotAnObject(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, FetschError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetschError::invalid_identifier("bad`name").to_string(),
            "Invalid identifier: bad`name"
        );
        assert_eq!(
            FetschError::unknown_statement_kind("merge").to_string(),
            "Unknown statement kind: merge"
        );
        assert_eq!(
            FetschError::not_an_object("array").to_string(),
            "Expected a JSON object, got array"
        );
        assert_eq!(
            FetschError::validation("empty").to_string(),
            "Validation error: empty"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: FetschError = parse_err.into();
        assert!(matches!(err, FetschError::Json(_)));
        assert!(err.to_string().starts_with("JSON serialization error"));
    }
}
