//! Error types for statement execution.

use thiserror::Error;

use super::redact::redact;

/// Failure of a single statement.
///
/// Every field is redacted at construction time, so `Display`, `Debug` and
/// any message built on top of this error are safe to log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The remote invocation itself failed (could not start, non-zero exit,
    /// connection refused, ...).
    #[error("run {command}, stdout: {stdout}, stderr: {stderr}: {reason}")]
    Transport { command: String, stdout: String, stderr: String, reason: String },

    /// The invocation ran but the server reported an error.
    #[error("sql error: {message}")]
    Sql { message: String },
}

impl ExecError {
    /// Create a transport failure; all parts are redacted.
    pub fn transport(
        command: impl AsRef<str>,
        stdout: impl AsRef<str>,
        stderr: impl AsRef<str>,
        reason: impl AsRef<str>,
    ) -> Self {
        Self::Transport {
            command: redact(command.as_ref()),
            stdout: redact(stdout.as_ref()),
            stderr: redact(stderr.as_ref()),
            reason: redact(reason.as_ref()),
        }
    }

    /// Create an SQL failure from the server's error stream; redacted.
    pub fn sql(message: impl AsRef<str>) -> Self {
        Self::Sql { message: redact(message.as_ref()) }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_sql(&self) -> bool {
        matches!(self, Self::Sql { .. })
    }
}

/// Errors reported by a [`RemoteExec`](super::RemoteExec) implementation.
#[derive(Error, Debug)]
pub enum RemoteExecError {
    /// The exec client could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The remote command exited with a non-zero status.
    #[error("command terminated with exit code {code}")]
    Exit { code: i32 },

    /// The remote command was killed by a signal.
    #[error("command terminated by signal")]
    Signal,

    /// Any other transport problem reported by the exec channel.
    #[error("remote exec failed: {message}")]
    Other { message: String },
}

impl RemoteExecError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_redacts_every_field() {
        let err = ExecError::transport(
            "mysql -h root:pw@db",
            "dsn=app:out@db",
            "conn app:err@db refused",
            "dial app:reason@db",
        );

        let ExecError::Transport { command, stdout, stderr, reason } = &err else {
            panic!("expected transport error");
        };
        assert_eq!(command, "mysql -h root:*****@db");
        assert_eq!(stdout, "dsn=app:*****@db");
        assert_eq!(stderr, "conn app:*****@db refused");
        assert_eq!(reason, "dial app:*****@db");

        let shown = err.to_string();
        for leaked in ["root:pw", "app:out", "app:err", "app:reason"] {
            assert!(!shown.contains(leaked), "{leaked} leaked into {shown}");
        }
    }

    #[test]
    fn test_sql_error_is_redacted() {
        let err = ExecError::sql("ERROR 2003 (HY000) dsn root:hunter2@db");
        assert!(err.is_sql());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "sql error: ERROR 2003 (HY000) dsn root:*****@db");

        // The match starts at the first colon on the line.
        let err = ExecError::sql("ERROR 2003: can't connect to root:hunter2@db");
        assert_eq!(err.to_string(), "sql error: ERROR 2003:*****@db");
    }

    #[test]
    fn test_remote_exec_error_display() {
        assert_eq!(
            RemoteExecError::Exit { code: 1 }.to_string(),
            "command terminated with exit code 1"
        );
        assert_eq!(RemoteExecError::other("stream closed").to_string(), "remote exec failed: stream closed");
    }
}
