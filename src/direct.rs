//! Direct-connection [`SqlExecutor`] over the MySQL wire protocol.
//!
//! Holds exactly one connection for its lifetime; the transaction opened by
//! `START TRANSACTION` lives on that connection, so there is no pooling.
//! Enabled with the `mysql-direct` feature.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Executor};
use tokio::sync::Mutex;

use crate::exec::redact::statement_kind;
use crate::exec::{ExecError, SqlExecutor};
use crate::secrets::SecretString;

const TARGET_SCHEMA: &str = "performance_schema";

/// [`SqlExecutor`] that talks to the server directly instead of through
/// the pod's `mysql` client.
pub struct DirectSqlExecutor {
    endpoint: String,
    conn: Mutex<Option<MySqlConnection>>,
}

impl DirectSqlExecutor {
    /// Open the connection.
    ///
    /// # Errors
    ///
    /// Authentication and other server-side refusals are [`ExecError::Sql`];
    /// everything else is [`ExecError::Transport`].
    pub async fn connect(
        host: &str,
        port: u16,
        user: &str,
        password: &SecretString,
    ) -> Result<Self, ExecError> {
        let endpoint = format!("mysql://{}@{}:{}/{}", user, host, port, TARGET_SCHEMA);
        let options = MySqlConnectOptions::new()
            .host(host)
            .port(port)
            .username(user)
            .password(password.expose_secret())
            .database(TARGET_SCHEMA);

        let conn = MySqlConnection::connect_with(&options)
            .await
            .map_err(|e| classify(&endpoint, e))?;

        tracing::info!(endpoint = %endpoint, "direct connection established");
        Ok(Self { endpoint, conn: Mutex::new(Some(conn)) })
    }
}

/// Maps a driver error onto the executor taxonomy.
fn classify(endpoint: &str, error: sqlx::Error) -> ExecError {
    match error {
        sqlx::Error::Database(db) => ExecError::sql(format!(
            "ERROR {}: {}",
            db.code().unwrap_or_default(),
            db.message()
        )),
        other => ExecError::transport(endpoint, "", "", other.to_string()),
    }
}

#[async_trait]
impl SqlExecutor for DirectSqlExecutor {
    async fn execute(&self, statement: &str) -> Result<(), ExecError> {
        let kind = statement_kind(statement);
        let mut guard = self.conn.lock().await;
        let conn = guard
            .as_mut()
            .ok_or_else(|| ExecError::transport(&self.endpoint, "", "", "executor is closed"))?;

        conn.execute(statement).await.map_err(|e| {
            let error = classify(&self.endpoint, e);
            tracing::warn!(statement = kind, error = %error, "statement failed");
            error
        })?;

        tracing::debug!(statement = kind, "statement executed");
        Ok(())
    }

    async fn close(&self) {
        if let Some(conn) = self.conn.lock().await.take() {
            if let Err(e) = conn.close().await {
                tracing::debug!(error = %e, "error while closing direct connection");
            }
        }
    }
}
