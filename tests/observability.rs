//! Logging initialisation runs in its own test binary: it installs the
//! process-wide subscriber.

use dualpass::config::LoggingConfig;
use dualpass::observability::init_logging;

#[test]
fn test_init_logging_is_idempotent() {
    let config = LoggingConfig { level: "dualpass=debug,warn".to_string(), json: true };

    assert!(init_logging(&config).is_ok());
    assert!(init_logging(&LoggingConfig::default()).is_ok());

    tracing::info!(batch = 3, "logging initialised");
}
