use std::io;
use thiserror::Error;

use crate::actors::messages::ActorError;

/// Every failure the core can report.
///
/// The keyword responder has no error path; these come from the layers around
/// it: configuration, form submissions, the embedded methods document and
/// actor messaging.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Mailbox closed, reply dropped or child timeout.
    #[error("Actor error: {0}")]
    Actor(#[from] ActorError),

    /// Rejected user input: blank or oversized query, out-of-range form values.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The geochemical methods document is malformed or incomplete.
    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Timed out: {0}")]
    Timeout(String),
}

impl AppError {
    /// True when the caller can fix the problem by changing its input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

// io::Error is not Clone; rebuild it from kind and message.
impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Actor(e) => AppError::Actor(e.clone()),
            AppError::Validation(msg) => AppError::Validation(msg.clone()),
            AppError::Config(msg) => AppError::Config(msg.clone()),
            AppError::Knowledge(msg) => AppError::Knowledge(msg.clone()),
            AppError::Internal(msg) => AppError::Internal(msg.clone()),
            AppError::Timeout(msg) => AppError::Timeout(msg.clone()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(err.to_string())
    }
}

/// JSON reaching the core is user-supplied form data (`--inputs`, `--input`).
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("malformed JSON: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = AppError::Validation("Query cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: Query cannot be empty");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_json_error_maps_to_validation() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: AppError = parse.unwrap_err().into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_clone_preserves_io_kind() {
        let err = AppError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match err.clone() {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_actor_errors_are_not_user_errors() {
        let err = AppError::from(ActorError::Channel("closed".to_string()));
        assert!(!err.is_user_error());
    }
}
