//! Transaction bookkeeping over a [`SqlExecutor`].
//!
//! ```text
//! Idle ─START TRANSACTION─▶ Open ─COMMIT ok─▶ Committed
//!                            │
//!                            ├─ statement fails, ROLLBACK ok ─▶ RolledBack
//!                            ├─ statement fails, ROLLBACK fails ─▶ Failed
//!                            └─ COMMIT fails ─▶ Failed
//! ```
//!
//! No retries happen here; re-issuing statements after an unknown commit
//! outcome is not safe.

use super::error::{Result, RotationError};
use super::statement::{COMMIT, ROLLBACK, START_TRANSACTION};
use super::types::TransactionState;
use crate::exec::{ExecError, SqlExecutor};

/// One explicit server-side transaction.
pub struct Transaction<'a, E: ?Sized> {
    executor: &'a E,
    state: TransactionState,
}

impl<'a, E: SqlExecutor + ?Sized> Transaction<'a, E> {
    /// Issue `START TRANSACTION`. On failure nothing is rolled back.
    pub async fn begin(executor: &'a E) -> Result<Transaction<'a, E>> {
        executor.execute(START_TRANSACTION).await.map_err(RotationError::Begin)?;
        tracing::debug!(state = %TransactionState::Open, "transaction started");
        Ok(Self { executor, state: TransactionState::Open })
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Run a statement inside the transaction.
    ///
    /// On failure the transaction is rolled back and the error built by
    /// `on_error` is returned, wrapped in [`RotationError::Rollback`] if the
    /// rollback fails too.
    pub async fn execute<F>(&mut self, statement: &str, on_error: F) -> Result<()>
    where
        F: FnOnce(ExecError) -> RotationError,
    {
        debug_assert_eq!(self.state, TransactionState::Open);
        match self.executor.execute(statement).await {
            Ok(()) => Ok(()),
            Err(e) => Err(self.abort(on_error(e)).await),
        }
    }

    async fn abort(&mut self, cause: RotationError) -> RotationError {
        match self.executor.execute(ROLLBACK).await {
            Ok(()) => {
                self.state = TransactionState::RolledBack;
                tracing::warn!(state = %self.state, error = %cause, "transaction rolled back");
                cause
            }
            Err(rollback) => {
                self.state = TransactionState::Failed;
                tracing::error!(
                    state = %self.state,
                    error = %cause,
                    rollback_error = %rollback,
                    "rollback failed, transaction state unknown"
                );
                RotationError::Rollback { cause: Box::new(cause), rollback }
            }
        }
    }

    /// Issue `COMMIT`. A failure is reported as-is, without a rollback.
    pub async fn commit(mut self) -> Result<()> {
        match self.executor.execute(COMMIT).await {
            Ok(()) => {
                self.state = TransactionState::Committed;
                tracing::debug!(state = %self.state, "transaction committed");
                Ok(())
            }
            Err(e) => {
                self.state = TransactionState::Failed;
                tracing::error!(state = %self.state, error = %e, "commit failed, verify outcome externally");
                Err(RotationError::CommitAmbiguous(e))
            }
        }
    }
}
