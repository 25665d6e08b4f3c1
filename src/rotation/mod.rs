//! Dual-password rotation for MySQL system users.
//!
//! A rotation is a two-step, zero-downtime affair:
//!
//! 1. [`Manager::update_user_passwords`] sets the new password for every
//!    `'user'@'host'` account and keeps the previous one valid as a
//!    secondary credential (`RETAIN CURRENT PASSWORD`).
//! 2. Once every client has picked up the new password,
//!    [`Manager::discard_old_passwords`] drops the secondary credential.
//!
//! Each step is one explicit transaction closed by `FLUSH PRIVILEGES` and
//! `COMMIT`. The manager never retries: callers own retry policy, and a
//! [`RotationError::is_ambiguous`] outcome must be verified against the
//! server before anything is re-issued.
//!
//! # Example
//!
//! ```rust,ignore
//! use dualpass::exec::{KubectlExec, TargetSession, Workload};
//! use dualpass::rotation::{Manager, RotationManager, UserRecord};
//!
//! let session = TargetSession::new(
//!     Workload::new("db", "cluster1-mysql-0"),
//!     "operator",
//!     operator_password,
//!     "cluster1-mysql-0.cluster1-mysql.db",
//! );
//! let manager = RotationManager::exec(session, KubectlExec::new());
//!
//! let users = vec![UserRecord::new("monitor", new_password, ["%", "localhost"])];
//! manager.update_user_passwords(&users).await?;
//! // ... roll clients over ...
//! manager.discard_old_passwords(&users).await?;
//! manager.close().await;
//! ```

pub mod error;
pub mod manager;
pub mod statement;
pub mod transaction;
pub mod types;

pub use crate::exec::TargetSession;
pub use error::{Result, RotationError};
pub use manager::{Manager, RotationManager};
pub use statement::escape_password;
pub use transaction::Transaction;
pub use types::{Operation, TransactionState, UserRecord};
