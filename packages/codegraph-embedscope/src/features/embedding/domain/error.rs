//! Embedding backend errors

use serde::Serialize;
use thiserror::Error;

/// Failure of one backend for one run
///
/// Every variant carries the backend name so failures stay attributable
/// once collected into a report.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackendError {
    /// Model could not be loaded or reached
    #[error("Backend '{backend}' unavailable: {message}")]
    Unavailable { backend: String, message: String },

    /// Backend returned a different number of vectors than snippets
    #[error("Backend '{backend}' returned {actual} vectors for {expected} snippets")]
    LengthMismatch {
        backend: String,
        expected: usize,
        actual: usize,
    },

    /// A vector's length disagrees with the backend's dimension
    #[error("Backend '{backend}' vector {row} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        backend: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Inference failed
    #[error("Backend '{backend}' failed: {message}")]
    Runtime { backend: String, message: String },
}

impl BackendError {
    pub fn unavailable(backend: impl Into<String>, message: impl Into<String>) -> Self {
        BackendError::Unavailable {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn runtime(backend: impl Into<String>, message: impl Into<String>) -> Self {
        BackendError::Runtime {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn backend(&self) -> &str {
        match self {
            BackendError::Unavailable { backend, .. }
            | BackendError::LengthMismatch { backend, .. }
            | BackendError::DimensionMismatch { backend, .. }
            | BackendError::Runtime { backend, .. } => backend,
        }
    }

    /// Transient failures may succeed on another attempt; alignment errors never do
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BackendError::Unavailable { .. } | BackendError::Runtime { .. }
        )
    }
}
