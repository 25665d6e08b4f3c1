//! Statement execution through the `mysql` client inside the server's pod.
//!
//! Each statement becomes one invocation of
//! `mysql --database performance_schema -p<password> -u <user> -h <host> -e <statement>`
//! run through a [`RemoteExec`]. The schema is only a connection target.
//!
//! # Classification
//!
//! - the exec channel returned an error: [`ExecError::Transport`]
//! - stderr contains `ERROR`: [`ExecError::Sql`]
//! - otherwise: success
//!
//! The `ERROR` check is a substring heuristic kept for compatibility with the
//! client's output format. A warning whose text happens to contain `ERROR`
//! is classified as a failure.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Instrument;

use super::client::SqlExecutor;
use super::error::ExecError;
use super::redact::{redact_bytes, redact_statement, statement_kind, REDACTED_VALUE};
use super::remote::RemoteExec;
use super::session::TargetSession;
use crate::rotation::statement::escape_password;

const CLIENT_BINARY: &str = "mysql";
const TARGET_SCHEMA: &str = "performance_schema";
const SQL_ERROR_MARKER: &str = "ERROR";

/// Position of the `-p<password>` argument in [`ExecSqlExecutor::command`].
const PASSWORD_ARG: usize = 3;
/// Position of the statement argument in [`ExecSqlExecutor::command`].
const STATEMENT_ARG: usize = 9;

/// [`SqlExecutor`] that runs every statement as a separate `mysql -e`
/// invocation inside the target workload.
pub struct ExecSqlExecutor<R> {
    remote: R,
    session: TargetSession,
    closed: AtomicBool,
}

impl<R: RemoteExec> ExecSqlExecutor<R> {
    pub fn new(session: TargetSession, remote: R) -> Self {
        Self { remote, session, closed: AtomicBool::new(false) }
    }

    pub fn session(&self) -> &TargetSession {
        &self.session
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    fn command(&self, statement: &str) -> Vec<String> {
        vec![
            CLIENT_BINARY.to_string(),
            "--database".to_string(),
            TARGET_SCHEMA.to_string(),
            format!("-p{}", escape_password(self.session.password.expose_secret())),
            "-u".to_string(),
            self.session.user.clone(),
            "-h".to_string(),
            self.session.host.clone(),
            "-e".to_string(),
            statement.to_string(),
        ]
    }
}

/// Renders a command for error messages with the inline password and any
/// `IDENTIFIED BY` literal masked.
fn display_command(command: &[String]) -> String {
    let parts: Vec<String> = command
        .iter()
        .enumerate()
        .map(|(i, arg)| match i {
            PASSWORD_ARG => format!("-p{}", REDACTED_VALUE),
            STATEMENT_ARG => redact_statement(arg),
            _ => arg.clone(),
        })
        .collect();
    format!("[{}]", parts.join(" "))
}

#[async_trait]
impl<R: RemoteExec> SqlExecutor for ExecSqlExecutor<R> {
    async fn execute(&self, statement: &str) -> Result<(), ExecError> {
        let command = self.command(statement);
        let kind = statement_kind(statement);

        if self.closed.load(Ordering::Acquire) {
            return Err(ExecError::transport(display_command(&command), "", "", "executor is closed"));
        }

        let span = crate::exec_span!(kind, workload = %self.session.workload);
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let result = self
            .remote
            .exec(&self.session.workload, &self.session.container, &command, &mut stdout, &mut stderr)
            .instrument(span)
            .await;

        if let Err(e) = result {
            let error = ExecError::transport(
                display_command(&command),
                redact_bytes(&stdout),
                redact_bytes(&stderr),
                e.to_string(),
            );
            tracing::warn!(statement = kind, workload = %self.session.workload, error = %error, "remote exec failed");
            return Err(error);
        }

        // Classify on the raw stream: redaction can swallow the marker.
        let raw_stderr = String::from_utf8_lossy(&stderr);
        if raw_stderr.contains(SQL_ERROR_MARKER) {
            let error = ExecError::sql(raw_stderr);
            tracing::warn!(statement = kind, workload = %self.session.workload, error = %error, "statement failed");
            return Err(error);
        }

        tracing::debug!(statement = kind, workload = %self.session.workload, "statement executed");
        Ok(())
    }

    async fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!(workload = %self.session.workload, "executor closed");
        }
    }
}
