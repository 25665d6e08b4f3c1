//! Scripted executor for in-library tests.
//!
//! Only available in test builds (`#[cfg(test)]`).

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::client::SqlExecutor;
use super::error::ExecError;

/// Records every statement and fails the ones it was told to.
#[derive(Default)]
pub struct ScriptedExecutor {
    statements: Mutex<Vec<String>>,
    by_call: HashMap<usize, ExecError>,
    by_prefix: Vec<(String, ExecError)>,
    closes: Mutex<usize>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `n`-th call (1-based).
    pub fn fail_call(mut self, n: usize, error: ExecError) -> Self {
        self.by_call.insert(n, error);
        self
    }

    /// Fail every statement starting with `prefix`.
    pub fn fail_matching(mut self, prefix: &str, error: ExecError) -> Self {
        self.by_prefix.push((prefix.to_string(), error));
        self
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        *self.closes.lock().unwrap()
    }
}

#[async_trait]
impl SqlExecutor for ScriptedExecutor {
    async fn execute(&self, statement: &str) -> Result<(), ExecError> {
        let call = {
            let mut statements = self.statements.lock().unwrap();
            statements.push(statement.to_string());
            statements.len()
        };
        if let Some(error) = self.by_call.get(&call) {
            return Err(error.clone());
        }
        if let Some((_, error)) = self.by_prefix.iter().find(|(p, _)| statement.starts_with(p)) {
            return Err(error.clone());
        }
        Ok(())
    }

    async fn close(&self) {
        *self.closes.lock().unwrap() += 1;
    }
}
