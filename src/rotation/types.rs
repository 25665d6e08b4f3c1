//! Rotation data model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::secrets::SecretString;

/// A user whose password is rotated, with every host pattern it is granted on.
///
/// Each host pattern is a separate account on the server (`'app'@'%'` and
/// `'app'@'localhost'` are distinct), so one record yields one statement per
/// host. A record with no hosts is valid and does nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: SecretString,
    #[serde(default)]
    pub hosts: Vec<String>,
}

impl UserRecord {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<SecretString>,
        hosts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            hosts: hosts.into_iter().map(Into::into).collect(),
        }
    }
}

/// The two batch operations the manager runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Set new passwords, keeping the current ones as secondary credentials.
    RotateWithFallback,
    /// Drop the secondary credentials left by a previous rotation.
    DiscardFallback,
}

impl Operation {
    /// Annotation used when a per-user statement of this operation fails.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RotateWithFallback => "alter user",
            Self::DiscardFallback => "discard old password",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a batch transaction stands. Only lives for one operation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionState {
    Idle,
    Open,
    Committed,
    RolledBack,
    /// Rollback or commit failed; the server-side outcome is unknown.
    Failed,
}

impl TransactionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed | Self::RolledBack | Self::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Open => "open",
            Self::Committed => "committed",
            Self::RolledBack => "rolled_back",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
