//! Projection errors

use serde::Serialize;
use thiserror::Error;

/// Degenerate input for a 2-component projection
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionError {
    #[error("Projection needs at least 2 snippets, got {found}")]
    TooFewSnippets { found: usize },

    #[error("Projection needs at least 2 embedding dimensions, got {found}")]
    TooFewDimensions { found: usize },

    #[error("Embedding value at row {row}, column {column} is not finite")]
    NonFiniteValue { row: usize, column: usize },
}
