//! Error types for rotation batches.

use thiserror::Error;

use super::types::Operation;
use crate::exec::ExecError;

/// Result type for rotation operations.
pub type Result<T> = std::result::Result<T, RotationError>;

/// Why a batch did not commit.
///
/// Messages are built from already-redacted [`ExecError`]s.
#[derive(Error, Debug)]
pub enum RotationError {
    /// `START TRANSACTION` failed; nothing was sent after it.
    #[error("start transaction: {0}")]
    Begin(#[source] ExecError),

    /// A per-user statement failed and the transaction was rolled back.
    #[error("{operation} '{user}'@'{host}': {source}")]
    Statement {
        operation: Operation,
        user: String,
        host: String,
        #[source]
        source: ExecError,
    },

    /// `FLUSH PRIVILEGES` failed and the transaction was rolled back.
    #[error("flush privileges: {0}")]
    Flush(#[source] ExecError),

    /// The rollback issued after `cause` failed as well. The server may still
    /// hold an open transaction with partial changes.
    #[error("{cause}; rollback: {rollback}")]
    Rollback {
        #[source]
        cause: Box<RotationError>,
        rollback: ExecError,
    },

    /// `COMMIT` failed after every statement succeeded. Whether the changes
    /// are applied is unknown and has to be verified against the server.
    #[error("commit transaction: {0}")]
    CommitAmbiguous(#[source] ExecError),
}

impl RotationError {
    pub fn statement(
        operation: Operation,
        user: impl Into<String>,
        host: impl Into<String>,
        source: ExecError,
    ) -> Self {
        Self::Statement { operation, user: user.into(), host: host.into(), source }
    }

    /// True when the transaction's fate on the server is unknown.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Rollback { .. } | Self::CommitAmbiguous(_))
    }

    /// The failure that started it all, looking through a failed rollback.
    pub fn root_cause(&self) -> &RotationError {
        match self {
            Self::Rollback { cause, .. } => cause.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_error_names_operation_and_account() {
        let err = RotationError::statement(
            Operation::RotateWithFallback,
            "app",
            "%",
            ExecError::sql("ERROR 1396 (HY000)"),
        );
        assert_eq!(err.to_string(), "alter user 'app'@'%': sql error: ERROR 1396 (HY000)");
        assert!(!err.is_ambiguous());
    }

    #[test]
    fn test_rollback_error_keeps_both_messages() {
        let cause = RotationError::Flush(ExecError::sql("ERROR 1227 flush denied"));
        let err = RotationError::Rollback {
            cause: Box::new(cause),
            rollback: ExecError::sql("ERROR 2013 lost connection"),
        };

        let shown = err.to_string();
        assert!(shown.contains("flush denied"));
        assert!(shown.contains("lost connection"));
        assert!(err.is_ambiguous());
        assert!(matches!(err.root_cause(), RotationError::Flush(_)));
    }

    #[test]
    fn test_commit_error_is_ambiguous() {
        let err = RotationError::CommitAmbiguous(ExecError::sql("ERROR 2013"));
        assert!(err.is_ambiguous());
        assert_eq!(err.to_string(), "commit transaction: sql error: ERROR 2013");
    }
}
