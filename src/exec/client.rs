//! The statement-execution seam used by the rotation manager.

use async_trait::async_trait;

use super::error::ExecError;

/// Capability to run a single SQL statement against a target server.
///
/// The exec-based [`ExecSqlExecutor`](super::ExecSqlExecutor) shells into the
/// server's pod; a native protocol client can satisfy the same contract
/// (see `DirectSqlExecutor` behind the `mysql-direct` feature).
///
/// Implementations run statements strictly in call order; a call returns only
/// once its statement has finished. Session continuity is not part of the
/// contract: [`ExecSqlExecutor`](super::ExecSqlExecutor) starts a new `mysql`
/// client for every statement, so its `START TRANSACTION` ... `COMMIT`
/// calls do not share a server-side session. A connection-holding executor
/// such as `DirectSqlExecutor` does keep one.
///
/// # Security
///
/// - Statements may embed passwords and MUST NOT be logged verbatim
/// - Every returned [`ExecError`] is already redacted
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Run one complete statement.
    ///
    /// # Errors
    ///
    /// - [`ExecError::Transport`] if the statement could not be delivered
    /// - [`ExecError::Sql`] if the server reported an error
    async fn execute(&self, statement: &str) -> Result<(), ExecError>;

    /// Release the executor's resources. Idempotent and infallible.
    async fn close(&self);
}

#[async_trait]
impl<T: SqlExecutor + ?Sized> SqlExecutor for std::sync::Arc<T> {
    async fn execute(&self, statement: &str) -> Result<(), ExecError> {
        (**self).execute(statement).await
    }

    async fn close(&self) {
        (**self).close().await
    }
}
