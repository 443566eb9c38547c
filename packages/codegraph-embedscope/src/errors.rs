//! Error types for codegraph-embedscope
//!
//! Each feature owns its error enum; this module unifies them for callers
//! that drive the whole pipeline.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::embedding::BackendError;
use crate::features::lexical::LexError;
use crate::features::parsing::ParseError;
use crate::features::projection::ProjectionError;
use crate::features::visualization::RenderError;

/// Main error type for codegraph-embedscope operations
#[derive(Debug, Error)]
pub enum EmbedScopeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural analysis error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Tokenizer error
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Embedding backend error
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Projection error
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Visualization sink error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for embedscope operations
pub type Result<T> = std::result::Result<T, EmbedScopeError>;
