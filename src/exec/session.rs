//! Identity a rotation acts through.

use serde::{Deserialize, Serialize};

use super::remote::Workload;
use crate::secrets::SecretString;

/// Container the database client runs in when none is configured.
pub const DEFAULT_CONTAINER: &str = "mysql";

/// Where and as whom statements run: the workload instance, the container
/// holding the `mysql` client, the connecting account and the host used in
/// the client's connection.
///
/// Fixed for the lifetime of one executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSession {
    pub workload: Workload,
    #[serde(default = "default_container")]
    pub container: String,
    pub user: String,
    pub password: SecretString,
    pub host: String,
}

fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}

impl TargetSession {
    pub fn new(
        workload: Workload,
        user: impl Into<String>,
        password: impl Into<SecretString>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            workload,
            container: default_container(),
            user: user.into(),
            password: password.into(),
            host: host.into(),
        }
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }
}
