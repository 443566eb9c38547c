//! Pipeline result types
//!
//! Every snippet and every backend of a run appears exactly once, either
//! with its result or with the reason it failed.

use serde::Serialize;
use thiserror::Error;

use crate::features::embedding::BackendError;
use crate::features::lexical::{LexError, TokenStream};
use crate::features::parsing::{ParseError, StructuralFacts};
use crate::features::projection::{ProjectedPoints, ProjectionError};

/// Per-snippet outcome of structural analysis and tokenization
///
/// The two results are independent: either may fail while the other succeeds.
#[derive(Debug, Clone, Serialize)]
pub struct SnippetReport {
    pub index: usize,
    pub label: String,
    pub facts: Result<StructuralFacts, ParseError>,
    pub tokens: Result<TokenStream, LexError>,
}

/// Why a backend produced no point cloud
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "stage", content = "error", rename_all = "snake_case")]
pub enum BackendFailure {
    #[error(transparent)]
    Embedding(BackendError),

    #[error(transparent)]
    Projection(ProjectionError),
}

/// Per-backend outcome of embedding and projection
#[derive(Debug, Clone, Serialize)]
pub struct BackendReport {
    pub backend: String,
    /// Embedding matrix shape, when embedding succeeded
    pub shape: Option<(usize, usize)>,
    pub outcome: Result<ProjectedPoints, BackendFailure>,
}

/// Complete result of one comparison run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub snippets: Vec<SnippetReport>,
    pub backends: Vec<BackendReport>,
    pub duration_ms: u64,
}

impl PipelineReport {
    /// Successful point clouds in backend order
    pub fn clouds(&self) -> Vec<ProjectedPoints> {
        self.backends
            .iter()
            .filter_map(|b| b.outcome.as_ref().ok())
            .cloned()
            .collect()
    }

    pub fn backend(&self, name: &str) -> Option<&BackendReport> {
        self.backends.iter().find(|b| b.backend == name)
    }

    pub fn failed_snippets(&self) -> usize {
        self.snippets
            .iter()
            .filter(|s| s.facts.is_err() || s.tokens.is_err())
            .count()
    }

    pub fn failed_backends(&self) -> usize {
        self.backends.iter().filter(|b| b.outcome.is_err()).count()
    }

    /// Human-readable run summary
    pub fn summary(&self) -> String {
        format!(
            "{} snippets ({} with failures), {} backends ({} failed) in {}ms",
            self.snippets.len(),
            self.failed_snippets(),
            self.backends.len(),
            self.failed_backends(),
            self.duration_ms
        )
    }
}
