//! # Configuration Settings
//!
//! Defines the configuration structure for dualpass.

use crate::errors::{Error, Result};
use crate::exec::{TargetSession, Workload, DEFAULT_CONTAINER};
use crate::secrets::SecretString;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "DUALPASS_";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Server the rotation runs against
    #[validate(nested)]
    pub target: TargetConfig,

    /// How the exec channel is reached
    #[validate(nested)]
    pub kubectl: KubectlConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Create configuration from `DUALPASS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            target: TargetConfig::from_env()?,
            kubectl: KubectlConfig::from_env(),
            logging: LoggingConfig::from_env(),
        })
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(Error::from)?;

        if self.target.password.is_empty() {
            return Err(Error::validation_field("Admin password cannot be empty", "password"));
        }

        Ok(())
    }

    /// Session the executor connects through
    pub fn session(&self) -> TargetSession {
        self.target.session()
    }
}

/// Workload instance and connecting account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TargetConfig {
    /// Namespace of the workload
    #[validate(length(min = 1, message = "Namespace cannot be empty"))]
    pub namespace: String,

    /// Pod running the database server
    #[validate(length(min = 1, message = "Pod cannot be empty"))]
    pub pod: String,

    /// Container holding the `mysql` client
    #[validate(length(min = 1, message = "Container cannot be empty"))]
    pub container: String,

    /// Connecting (administrative) account
    #[validate(length(min = 1, message = "Admin user cannot be empty"))]
    pub user: String,

    /// Connecting account's current password
    pub password: SecretString,

    /// Host passed to the client's `-h` flag
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,
}

impl TargetConfig {
    /// Create TargetConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let password = SecretString::new(required("ADMIN_PASSWORD")?);

        Ok(Self {
            namespace: optional("NAMESPACE").unwrap_or_else(|| "default".to_string()),
            pod: optional("POD").unwrap_or_default(),
            container: optional("CONTAINER").unwrap_or_else(|| DEFAULT_CONTAINER.to_string()),
            user: optional("ADMIN_USER").unwrap_or_else(|| "operator".to_string()),
            password,
            host: optional("HOST").unwrap_or_else(|| "localhost".to_string()),
        })
    }

    pub fn session(&self) -> TargetSession {
        TargetSession::new(
            Workload::new(self.namespace.clone(), self.pod.clone()),
            self.user.clone(),
            self.password.clone(),
            self.host.clone(),
        )
        .with_container(self.container.clone())
    }
}

/// Exec channel configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KubectlConfig {
    /// kubectl binary
    #[validate(length(min = 1, message = "kubectl binary cannot be empty"))]
    pub binary: String,

    /// Optional kubeconfig context
    pub context: Option<String>,
}

impl Default for KubectlConfig {
    fn default() -> Self {
        Self { binary: "kubectl".to_string(), context: None }
    }
}

impl KubectlConfig {
    /// Create KubectlConfig from environment variables
    pub fn from_env() -> Self {
        Self {
            binary: optional("KUBECTL").unwrap_or_else(|| "kubectl".to_string()),
            context: optional("KUBE_CONTEXT"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or an EnvFilter directive
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,

    /// Enable JSON structured logging
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl LoggingConfig {
    /// Create LoggingConfig from environment variables
    pub fn from_env() -> Self {
        let level = optional("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let json = optional("LOG_FORMAT").map(|s| s.eq_ignore_ascii_case("json")).unwrap_or(false);
        Self { level, json }
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, name)).ok().filter(|v| !v.is_empty())
}

fn required(name: &str) -> Result<String> {
    optional(name).ok_or_else(|| Error::config(format!("{}{} must be set", ENV_PREFIX, name)))
}
