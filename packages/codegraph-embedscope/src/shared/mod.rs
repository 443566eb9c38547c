//! Shared module - Common types and utilities
//!
//! Types here are shared across all features and carry no parser or model
//! backend dependencies.

pub mod models;
pub mod parallel;

// Re-exports for convenience
pub use models::*;
pub use parallel::build_thread_pool;
