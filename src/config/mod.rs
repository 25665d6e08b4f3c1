//! # Configuration Management
//!
//! Settings come from `DUALPASS_*` environment variables (a `.env` file is
//! loaded by the binary first):
//!
//! | Variable                  | Default     |
//! |---------------------------|-------------|
//! | `DUALPASS_NAMESPACE`      | `default`   |
//! | `DUALPASS_POD`            | required (or `--pod`) |
//! | `DUALPASS_CONTAINER`      | `mysql`     |
//! | `DUALPASS_ADMIN_USER`     | `operator`  |
//! | `DUALPASS_ADMIN_PASSWORD` | required    |
//! | `DUALPASS_HOST`           | `localhost` |
//! | `DUALPASS_KUBECTL`        | `kubectl`   |
//! | `DUALPASS_KUBE_CONTEXT`   | unset       |
//! | `DUALPASS_LOG_LEVEL`      | `info`      |
//! | `DUALPASS_LOG_FORMAT`     | `text`      |

pub mod settings;

pub use settings::{Config, KubectlConfig, LoggingConfig, TargetConfig, ENV_PREFIX};
