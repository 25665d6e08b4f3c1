//! # Error Handling
//!
//! Crate-level error type. See [`types`] for details.

pub mod types;

pub use types::{Error, Result};
