//! A [`RemoteExec`] that behaves like `mysql -e` inside a pod.
//!
//! Statements are recorded in order. Scripted failures either write an
//! `ERROR` line to stderr (server-side error) or fail the exec itself
//! (transport error), matching on the statement prefix.

use async_trait::async_trait;
use dualpass::exec::{RemoteExec, RemoteExecError, Workload};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Failure {
    /// Exit 0, but an `ERROR` line on stderr.
    Sql(String),
    /// Non-zero exit with the given stderr.
    Transport { code: i32, stderr: String },
}

#[derive(Default)]
pub struct FakeMysql {
    failures: Vec<(String, Failure)>,
    warning: Option<String>,
    statements: Mutex<Vec<String>>,
    argv: Mutex<Vec<Vec<String>>>,
}

impl FakeMysql {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(mut self, prefix: &str, failure: Failure) -> Self {
        self.failures.push((prefix.to_string(), failure));
        self
    }

    /// Stderr written on every successful call.
    pub fn warn(mut self, warning: &str) -> Self {
        self.warning = Some(warning.to_string());
        self
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn argv(&self) -> Vec<Vec<String>> {
        self.argv.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteExec for FakeMysql {
    async fn exec(
        &self,
        _target: &Workload,
        _container: &str,
        command: &[String],
        _stdout: &mut Vec<u8>,
        stderr: &mut Vec<u8>,
    ) -> Result<(), RemoteExecError> {
        self.argv.lock().unwrap().push(command.to_vec());

        let statement = command
            .iter()
            .position(|arg| arg == "-e")
            .and_then(|i| command.get(i + 1))
            .cloned()
            .ok_or_else(|| RemoteExecError::other("no -e argument"))?;
        self.statements.lock().unwrap().push(statement.clone());

        if let Some(warning) = &self.warning {
            stderr.extend_from_slice(warning.as_bytes());
        }

        match self.failures.iter().find(|(prefix, _)| statement.starts_with(prefix)) {
            None => Ok(()),
            Some((_, Failure::Sql(message))) => {
                stderr.extend_from_slice(message.as_bytes());
                Ok(())
            }
            Some((_, Failure::Transport { code, stderr: message })) => {
                stderr.extend_from_slice(message.as_bytes());
                Err(RemoteExecError::Exit { code: *code })
            }
        }
    }
}
