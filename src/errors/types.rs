//! # Error Types
//!
//! Crate-level errors for configuration, batch files and the CLI, using
//! `thiserror`. Statement and rotation failures have their own types in
//! [`crate::exec`] and [`crate::rotation`] and convert into [`Error`].

use crate::exec::ExecError;
use crate::rotation::RotationError;

/// Custom result type for dualpass operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dualpass
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },

    /// A users file could not be read or parsed
    #[error("Invalid batch file '{path}': {message}")]
    Batch { path: String, message: String },

    /// I/O errors with additional context
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },

    /// Statement execution outside a rotation batch
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// A rotation batch did not commit
    #[error(transparent)]
    Rotation(#[from] RotationError),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into(), field: None }
    }

    /// Create a validation error with field information
    pub fn validation_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Validation { message: message.into(), field: Some(field.into()) }
    }

    /// Create a batch file error
    pub fn batch<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Batch { path: path.into(), message: message.into() }
    }

    /// Create an I/O error with context
    pub fn io<S: Into<String>>(source: std::io::Error, context: S) -> Self {
        Self::Io { source, context: context.into() }
    }

    /// True when the server-side outcome of a rotation is unknown
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Error::Rotation(e) if e.is_ambiguous())
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io { source: error, context: "I/O operation failed".to_string() }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let error_messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message.as_ref().map_or("Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                format!("{}: {}", field, error_messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(format!("Validation failed: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::config("DUALPASS_ADMIN_PASSWORD must be set");
        assert!(matches!(error, Error::Config { .. }));
        assert_eq!(error.to_string(), "Configuration error: DUALPASS_ADMIN_PASSWORD must be set");
    }

    #[test]
    fn test_validation_error_field() {
        let error = Error::validation_field("Host cannot be empty", "host");
        if let Error::Validation { field, .. } = error {
            assert_eq!(field, Some("host".to_string()));
        } else {
            panic!("expected validation error");
        }
    }

    #[test]
    fn test_rotation_conversion_keeps_message_and_ambiguity() {
        let rotation = RotationError::CommitAmbiguous(ExecError::sql("ERROR 2013"));
        let error: Error = rotation.into();
        assert_eq!(error.to_string(), "commit transaction: sql error: ERROR 2013");
        assert!(error.is_ambiguous());

        let error: Error = RotationError::Flush(ExecError::sql("ERROR 1227")).into();
        assert!(!error.is_ambiguous());
    }

    #[test]
    fn test_io_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "users.yaml");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io { .. }));
    }
}
