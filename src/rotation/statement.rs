//! Statement construction and password escaping.
//!
//! The manager only ever issues the statements built here:
//!
//! - `START TRANSACTION`
//! - `ALTER USER '<user>'@'<host>' IDENTIFIED BY '<password>' RETAIN CURRENT PASSWORD`
//! - `ALTER USER '<user>'@'<host>' DISCARD OLD PASSWORD`
//! - `FLUSH PRIVILEGES`
//! - `ROLLBACK`
//! - `COMMIT`
//!
//! Usernames and host patterns come from a trusted source and are embedded
//! as-is. Passwords go through [`escape_password`].

use crate::secrets::SecretString;

pub const START_TRANSACTION: &str = "START TRANSACTION";
pub const FLUSH_PRIVILEGES: &str = "FLUSH PRIVILEGES";
pub const ROLLBACK: &str = "ROLLBACK";
pub const COMMIT: &str = "COMMIT";

/// Escapes a password for a single-quoted SQL literal or an inline `-p` flag.
///
/// Backslashes are escaped first so the backslashes added for `'` and `"`
/// are not doubled afterwards. This is syntactic quoting, not a defence
/// against hostile input.
pub fn escape_password(password: &str) -> String {
    password.replace('\\', "\\\\").replace('\'', "\\'").replace('"', "\\\"")
}

/// Sets a new password and keeps the current one as the secondary credential.
pub fn alter_user_retain(username: &str, host: &str, password: &SecretString) -> String {
    format!(
        "ALTER USER '{}'@'{}' IDENTIFIED BY '{}' RETAIN CURRENT PASSWORD",
        username,
        host,
        escape_password(password.expose_secret())
    )
}

/// Drops the secondary credential kept by [`alter_user_retain`].
pub fn discard_old_password(username: &str, host: &str) -> String {
    format!("ALTER USER '{}'@'{}' DISCARD OLD PASSWORD", username, host)
}
