//! Credential redaction for anything that leaves the executor.
//!
//! Client output can echo a connection string (`user:password@host`), and a
//! rendered command carries both the connecting password and, for rotation
//! statements, the new password. Every string that ends up in an
//! [`ExecError`](super::ExecError) or a log line passes through here first.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Replacement for the credentials segment of a connection string.
pub const REDACTED_CREDENTIALS: &str = ":*****@";

/// Replacement for an inline password value.
pub const REDACTED_VALUE: &str = "*****";

/// Greedy on purpose: `a:b@c:d@e` collapses to `a:*****@e`.
static CREDENTIALS_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(":.*@").unwrap());

/// Matches the quoted literal after `IDENTIFIED BY`, honouring backslash escapes.
static IDENTIFIED_BY_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(IDENTIFIED\s+BY\s+)'(?:[^'\\]|\\.)*'").unwrap());

/// Replaces every `:<anything>@` substring with `:*****@`.
pub fn redact(text: &str) -> String {
    match CREDENTIALS_SEGMENT.replace_all(text, NoExpand(REDACTED_CREDENTIALS)) {
        Cow::Borrowed(_) => text.to_string(),
        Cow::Owned(redacted) => redacted,
    }
}

/// Lossy UTF-8 decode followed by [`redact`].
pub fn redact_bytes(bytes: &[u8]) -> String {
    redact(&String::from_utf8_lossy(bytes))
}

/// Masks the password literal of an `ALTER USER ... IDENTIFIED BY '...'`
/// statement. Other statements are returned unchanged.
pub fn redact_statement(statement: &str) -> String {
    IDENTIFIED_BY_LITERAL
        .replace_all(statement, format!("${{1}}'{}'", REDACTED_VALUE).as_str())
        .into_owned()
}

/// Short, password-free label for a statement, used as a span/log field.
pub fn statement_kind(statement: &str) -> &'static str {
    let upper = statement.trim_start().to_ascii_uppercase();
    if upper.starts_with("START TRANSACTION") {
        "start_transaction"
    } else if upper.starts_with("ALTER USER") {
        if upper.contains("DISCARD OLD PASSWORD") {
            "discard_old_password"
        } else {
            "alter_user"
        }
    } else if upper.starts_with("FLUSH PRIVILEGES") {
        "flush_privileges"
    } else if upper.starts_with("ROLLBACK") {
        "rollback"
    } else if upper.starts_with("COMMIT") {
        "commit"
    } else {
        "other"
    }
}
