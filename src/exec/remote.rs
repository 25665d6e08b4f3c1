//! Remote command execution inside a workload instance.
//!
//! [`RemoteExec`] is the only channel the executor has to the database: run
//! an argument vector inside a named container of a pod and capture both
//! output streams. [`KubectlExec`] implements it by shelling out to
//! `kubectl exec`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use super::error::RemoteExecError;

/// Reference to the workload instance (pod) statements run in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Workload {
    pub namespace: String,
    pub name: String,
}

impl Workload {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self { namespace: namespace.into(), name: name.into() }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Runs a command inside a container of a workload instance.
///
/// Implementations write whatever the command produced into `stdout` and
/// `stderr`, including when they return an error, so the caller can report
/// partial output.
///
/// # Security
///
/// `command` carries credentials. Implementations MUST NOT log it.
#[async_trait]
pub trait RemoteExec: Send + Sync {
    async fn exec(
        &self,
        target: &Workload,
        container: &str,
        command: &[String],
        stdout: &mut Vec<u8>,
        stderr: &mut Vec<u8>,
    ) -> Result<(), RemoteExecError>;
}

/// [`RemoteExec`] backed by the `kubectl` binary.
#[derive(Debug, Clone)]
pub struct KubectlExec {
    binary: PathBuf,
    context: Option<String>,
}

impl Default for KubectlExec {
    fn default() -> Self {
        Self { binary: PathBuf::from("kubectl"), context: None }
    }
}

impl KubectlExec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific kubectl binary instead of the one on `PATH`.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Pin the kubeconfig context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    fn args(&self, target: &Workload, container: &str, command: &[String]) -> Vec<String> {
        let mut args = Vec::with_capacity(command.len() + 9);
        if let Some(context) = &self.context {
            args.push("--context".to_string());
            args.push(context.clone());
        }
        args.extend([
            "exec".to_string(),
            "-n".to_string(),
            target.namespace.clone(),
            target.name.clone(),
            "-c".to_string(),
            container.to_string(),
            "--".to_string(),
        ]);
        args.extend(command.iter().cloned());
        args
    }
}

#[async_trait]
impl RemoteExec for KubectlExec {
    async fn exec(
        &self,
        target: &Workload,
        container: &str,
        command: &[String],
        stdout: &mut Vec<u8>,
        stderr: &mut Vec<u8>,
    ) -> Result<(), RemoteExecError> {
        tracing::debug!(workload = %target, container, "kubectl exec");

        let output = Command::new(&self.binary)
            .args(self.args(target, container, command))
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| RemoteExecError::Spawn {
                program: self.binary.display().to_string(),
                source,
            })?;

        stdout.extend_from_slice(&output.stdout);
        stderr.extend_from_slice(&output.stderr);

        if output.status.success() {
            return Ok(());
        }
        match output.status.code() {
            Some(code) => Err(RemoteExecError::Exit { code }),
            None => Err(RemoteExecError::Signal),
        }
    }
}
