//! Integration tests for configuration management
//!
//! These tests validate that `DUALPASS_*` environment variables flow into
//! the executor session.

use dualpass::exec::Workload;
use dualpass::{Config, Error, Result};
use std::env;
use std::sync::Mutex;

// Use a mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const VARS: &[&str] = &[
    "DUALPASS_NAMESPACE",
    "DUALPASS_POD",
    "DUALPASS_CONTAINER",
    "DUALPASS_ADMIN_USER",
    "DUALPASS_ADMIN_PASSWORD",
    "DUALPASS_HOST",
    "DUALPASS_KUBECTL",
    "DUALPASS_KUBE_CONTEXT",
    "DUALPASS_LOG_LEVEL",
    "DUALPASS_LOG_FORMAT",
];

/// Runs `f` with a clean `DUALPASS_*` environment plus `vars`, then restores it.
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let saved: Vec<(&str, Option<String>)> =
        VARS.iter().map(|name| (*name, env::var(name).ok())).collect();
    for name in VARS {
        env::remove_var(name);
    }
    for (name, value) in vars {
        env::set_var(name, value);
    }

    let result = f();

    for (name, value) in saved {
        match value {
            Some(value) => env::set_var(name, value),
            None => env::remove_var(name),
        }
    }
    result
}

#[test]
fn test_config_environment_integration() -> Result<()> {
    let config = with_env(
        &[
            ("DUALPASS_NAMESPACE", "db"),
            ("DUALPASS_POD", "cluster1-mysql-0"),
            ("DUALPASS_CONTAINER", "mysqld"),
            ("DUALPASS_ADMIN_USER", "root"),
            ("DUALPASS_ADMIN_PASSWORD", "s3cr'et"),
            ("DUALPASS_HOST", "cluster1-mysql-0.cluster1-mysql.db"),
            ("DUALPASS_KUBECTL", "/usr/local/bin/kubectl"),
            ("DUALPASS_KUBE_CONTEXT", "staging"),
            ("DUALPASS_LOG_LEVEL", "debug"),
            ("DUALPASS_LOG_FORMAT", "JSON"),
        ],
        Config::from_env,
    )?;

    config.validate()?;
    assert_eq!(config.kubectl.binary, "/usr/local/bin/kubectl");
    assert_eq!(config.kubectl.context.as_deref(), Some("staging"));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);

    let session = config.session();
    assert_eq!(session.workload, Workload::new("db", "cluster1-mysql-0"));
    assert_eq!(session.container, "mysqld");
    assert_eq!(session.user, "root");
    assert_eq!(session.password.expose_secret(), "s3cr'et");
    assert_eq!(session.host, "cluster1-mysql-0.cluster1-mysql.db");

    Ok(())
}

#[test]
fn test_config_defaults_integration() -> Result<()> {
    let config = with_env(&[("DUALPASS_ADMIN_PASSWORD", "hunter2")], Config::from_env)?;

    assert_eq!(config.target.namespace, "default");
    assert_eq!(config.target.container, "mysql");
    assert_eq!(config.target.user, "operator");
    assert_eq!(config.target.host, "localhost");
    assert_eq!(config.kubectl.binary, "kubectl");
    assert!(config.kubectl.context.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);

    // The pod has no sensible default and is usually supplied on the command line.
    assert!(config.target.pod.is_empty());
    assert!(config.validate().is_err());

    Ok(())
}

#[test]
fn test_missing_admin_password_is_rejected() {
    let result = with_env(&[("DUALPASS_POD", "cluster1-mysql-0")], Config::from_env);

    match result {
        Err(Error::Config { message }) => assert!(message.contains("DUALPASS_ADMIN_PASSWORD")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_empty_values_fall_back_to_defaults() -> Result<()> {
    let config = with_env(
        &[("DUALPASS_ADMIN_PASSWORD", "hunter2"), ("DUALPASS_NAMESPACE", ""), ("DUALPASS_HOST", "")],
        Config::from_env,
    )?;

    assert_eq!(config.target.namespace, "default");
    assert_eq!(config.target.host, "localhost");
    Ok(())
}

#[test]
fn test_config_debug_hides_password() -> Result<()> {
    let config = with_env(
        &[("DUALPASS_ADMIN_PASSWORD", "hunter2"), ("DUALPASS_POD", "cluster1-mysql-0")],
        Config::from_env,
    )?;

    assert!(!format!("{:?}", config).contains("hunter2"));
    assert!(!serde_json::to_string(&config).unwrap().contains("hunter2"));
    Ok(())
}
