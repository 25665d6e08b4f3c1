//! # Structured Logging
//!
//! Span macros for statement execution and rotation batches.
//!
//! Fields are limited to identifiers (statement kind, workload, user, host).
//! Statement text and command lines carry passwords and are never recorded.

/// Create a tracing span for a single statement execution.
///
/// ```rust,ignore
/// let span = exec_span!("alter_user", workload = %workload);
/// ```
#[macro_export]
macro_rules! exec_span {
    ($statement:expr) => {
        tracing::debug_span!(
            "sql_exec",
            statement = %$statement,
            operation_id = %uuid::Uuid::new_v4()
        )
    };
    ($statement:expr, $($field:tt)*) => {
        tracing::debug_span!(
            "sql_exec",
            statement = %$statement,
            operation_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Create a tracing span for a rotation batch.
#[macro_export]
macro_rules! rotation_span {
    ($operation:expr) => {
        tracing::info_span!(
            "rotation",
            operation = %$operation,
            batch_id = %uuid::Uuid::new_v4()
        )
    };
    ($operation:expr, $($field:tt)*) => {
        tracing::info_span!(
            "rotation",
            operation = %$operation,
            batch_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Log configuration at startup
pub fn log_config_info(config: &crate::config::Config) {
    tracing::info!(
        namespace = %config.target.namespace,
        pod = %config.target.pod,
        container = %config.target.container,
        admin_user = %config.target.user,
        host = %config.target.host,
        kubectl = %config.kubectl.binary,
        json_logging = config.logging.json,
        "dualpass configuration"
    );
}
