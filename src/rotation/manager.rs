//! Rotation manager: the two batch operations over a [`SqlExecutor`].

use async_trait::async_trait;
use tracing::Instrument;

use super::error::{Result, RotationError};
use super::statement::{alter_user_retain, discard_old_password, FLUSH_PRIVILEGES};
use super::transaction::Transaction;
use super::types::{Operation, UserRecord};
use crate::exec::{ExecSqlExecutor, RemoteExec, SqlExecutor, TargetSession};

/// Password management for the system users of one server.
///
/// Both operations are transactional: either every statement of the batch
/// commits, or the transaction is rolled back and the first failure is
/// returned. Users and hosts are processed in input order.
#[async_trait]
pub trait Manager: Send + Sync {
    /// Set new passwords while retaining the current ones as secondary
    /// credentials (dual password), so clients using the old password keep
    /// working until [`Manager::discard_old_passwords`] is called.
    async fn update_user_passwords(&self, users: &[UserRecord]) -> Result<()>;

    /// Discard the secondary credentials kept by a previous rotation.
    async fn discard_old_passwords(&self, users: &[UserRecord]) -> Result<()>;

    /// Release the underlying executor.
    async fn close(&self);

    /// Run `operation` over `users`.
    async fn apply(&self, operation: Operation, users: &[UserRecord]) -> Result<()> {
        match operation {
            Operation::RotateWithFallback => self.update_user_passwords(users).await,
            Operation::DiscardFallback => self.discard_old_passwords(users).await,
        }
    }
}

/// [`Manager`] implementation that sequences statements through any
/// [`SqlExecutor`].
pub struct RotationManager<E> {
    executor: E,
}

impl<R: RemoteExec> RotationManager<ExecSqlExecutor<R>> {
    /// Manager that runs statements through the `mysql` client inside the
    /// session's workload.
    pub fn exec(session: TargetSession, remote: R) -> Self {
        Self::new(ExecSqlExecutor::new(session, remote))
    }
}

impl<E: SqlExecutor> RotationManager<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn run(&self, operation: Operation, users: &[UserRecord]) -> Result<()> {
        let accounts: usize = users.iter().map(|u| u.hosts.len()).sum();
        tracing::info!(%operation, users = users.len(), accounts, "starting password batch");

        let mut tx = Transaction::begin(&self.executor).await?;

        for user in users {
            for host in &user.hosts {
                let statement = match operation {
                    Operation::RotateWithFallback => {
                        alter_user_retain(&user.username, host, &user.password)
                    }
                    Operation::DiscardFallback => discard_old_password(&user.username, host),
                };
                tx.execute(&statement, |source| {
                    RotationError::statement(operation, user.username.as_str(), host.as_str(), source)
                })
                .await?;
                tracing::debug!(%operation, user = %user.username, host = %host, "account updated");
            }
        }

        tx.execute(FLUSH_PRIVILEGES, RotationError::Flush).await?;
        tx.commit().await?;

        tracing::info!(%operation, users = users.len(), accounts, "password batch committed");
        Ok(())
    }
}

#[async_trait]
impl<E: SqlExecutor> Manager for RotationManager<E> {
    async fn update_user_passwords(&self, users: &[UserRecord]) -> Result<()> {
        let operation = Operation::RotateWithFallback;
        self.run(operation, users).instrument(crate::rotation_span!(operation)).await
    }

    async fn discard_old_passwords(&self, users: &[UserRecord]) -> Result<()> {
        let operation = Operation::DiscardFallback;
        self.run(operation, users).instrument(crate::rotation_span!(operation)).await
    }

    async fn close(&self) {
        self.executor.close().await
    }
}
