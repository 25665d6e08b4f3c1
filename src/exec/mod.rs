//! Command executor: turns one SQL statement into a remote `mysql` invocation.
//!
//! # Architecture
//!
//! ```text
//! RotationManager → SqlExecutor::execute(stmt)
//!                     └─ ExecSqlExecutor → RemoteExec::exec(pod, container, argv)
//!                                            └─ stdout/stderr → classify + redact
//! ```
//!
//! The [`SqlExecutor`] trait is the seam: [`ExecSqlExecutor`] goes through the
//! pod, [`DryRunExecutor`] only records, and a direct protocol client can be
//! swapped in without touching the rotation logic.
//!
//! # Security Considerations
//!
//! - Every string placed in an [`ExecError`] goes through [`redact`]
//! - Rendered commands mask the inline password and `IDENTIFIED BY` literals
//! - Logs carry the statement kind only, never the statement text

pub mod client;
pub mod dry_run;
pub mod error;
pub mod mysql_cli;
pub mod redact;
pub mod remote;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use client::SqlExecutor;
pub use dry_run::DryRunExecutor;
pub use error::{ExecError, RemoteExecError};
pub use mysql_cli::ExecSqlExecutor;
pub use redact::{redact, redact_statement};
pub use remote::{KubectlExec, RemoteExec, Workload};
pub use session::{TargetSession, DEFAULT_CONTAINER};
