//! Common test utilities for codegraph-embedscope
//!
//! Shared fixtures and mock backends for integration tests.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
