//! Users file loading.
//!
//! A users file lists the rotation batch in processing order, as YAML or
//! JSON (chosen by extension, YAML otherwise):
//!
//! ```yaml
//! users:
//!   - username: monitor
//!     password: "n3w'pa\"ss"
//!     hosts: ["%", "localhost"]
//!   - username: operator
//!     password: another
//!     hosts: ["%"]
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::errors::{Error, Result};
use crate::rotation::UserRecord;

#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default)]
    users: Vec<UserRecord>,
}

/// Read and validate a users file.
pub fn load_batch(path: &Path) -> Result<Vec<UserRecord>> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(e, format!("Failed to read users file '{}'", display)))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file: BatchFile = if is_json {
        serde_json::from_str(&content).map_err(|e| Error::batch(&display, e.to_string()))?
    } else {
        serde_yaml::from_str(&content).map_err(|e| Error::batch(&display, e.to_string()))?
    };

    validate_batch(&file.users).map_err(|message| Error::batch(&display, message))?;
    Ok(file.users)
}

/// Usernames and hosts are embedded into statements unescaped, so they must
/// not be able to close the surrounding quotes.
fn validate_batch(users: &[UserRecord]) -> std::result::Result<(), String> {
    for (i, user) in users.iter().enumerate() {
        if user.username.is_empty() {
            return Err(format!("users[{}]: username cannot be empty", i));
        }
        if user.username.contains(['\'', '\\']) {
            return Err(format!("users[{}]: username '{}' contains a quote or backslash", i, user.username));
        }
        for host in &user.hosts {
            if host.is_empty() || host.contains(['\'', '\\']) {
                return Err(format!("users[{}]: invalid host pattern '{}'", i, host));
            }
        }
    }
    Ok(())
}
