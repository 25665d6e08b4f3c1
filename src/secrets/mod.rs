//! Secret value handling.
//!
//! Both the connecting account's password and every rotated user password are
//! held in a [`SecretString`]. The raw value is only read when a statement or
//! command argument is rendered, and the rendering paths pass their output
//! through [`crate::exec::redact`] before it can reach an error or a log.

pub mod types;

pub use types::SecretString;
