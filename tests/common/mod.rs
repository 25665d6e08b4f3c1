//! Common test utilities for all integration tests.
//!
//! Provides a fake `mysql`-in-a-pod exec channel.

#![allow(dead_code)]

pub mod fake_mysql;
