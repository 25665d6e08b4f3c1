//! # dualpass
//!
//! Zero-downtime password rotation for MySQL system users, driven through a
//! remote command channel into the server's pod rather than a direct client
//! connection.
//!
//! ## Architecture
//!
//! ```text
//! RotationManager ──▶ SqlExecutor::execute(stmt) ──▶ RemoteExec (kubectl exec)
//!   (transaction            (classify stderr,              └─ mysql -e <stmt>
//!    bookkeeping)             redact credentials)
//! ```
//!
//! ## Core Components
//!
//! - **[`exec`]**: the command executor. Turns one statement into a `mysql`
//!   invocation inside the pod and classifies the result
//! - **[`rotation`]**: the rotation manager. Wraps a batch of `ALTER USER`
//!   statements in an explicit transaction with rollback-and-report semantics
//! - **[`secrets`]**: password wrapper that never prints its value
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dualpass::exec::{KubectlExec, TargetSession, Workload};
//! use dualpass::rotation::{Manager, RotationManager, UserRecord};
//!
//! # async fn run() -> dualpass::Result<()> {
//! let session = TargetSession::new(
//!     Workload::new("db", "cluster1-mysql-0"),
//!     "operator",
//!     "operator-password",
//!     "localhost",
//! );
//! let manager = RotationManager::exec(session, KubectlExec::new());
//! let users = vec![UserRecord::new("monitor", "new-password", ["%", "localhost"])];
//!
//! manager.update_user_passwords(&users).await?;
//! manager.close().await;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
#[cfg(feature = "mysql-direct")]
pub mod direct;
pub mod errors;
pub mod exec;
pub mod observability;
pub mod rotation;
pub mod secrets;

// Re-export commonly used types and traits
pub use config::Config;
#[cfg(feature = "mysql-direct")]
pub use direct::DirectSqlExecutor;
pub use errors::{Error, Result};
pub use exec::{ExecError, ExecSqlExecutor, KubectlExec, SqlExecutor, TargetSession, Workload};
pub use rotation::{Manager, Operation, RotationError, RotationManager, UserRecord};
pub use secrets::SecretString;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
