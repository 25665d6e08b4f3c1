//! Executor that records statements instead of running them.
//!
//! Backs the CLI's `--dry-run` flag. Recorded statements have their password
//! literals masked, so the plan can be printed as-is.

use async_trait::async_trait;
use std::sync::Mutex;

use super::client::SqlExecutor;
use super::error::ExecError;
use super::redact::redact_statement;

#[derive(Debug, Default)]
pub struct DryRunExecutor {
    statements: Mutex<Vec<String>>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements seen so far, in order, with passwords masked.
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl SqlExecutor for DryRunExecutor {
    async fn execute(&self, statement: &str) -> Result<(), ExecError> {
        self.statements.lock().unwrap_or_else(|e| e.into_inner()).push(redact_statement(statement));
        Ok(())
    }

    async fn close(&self) {}
}
