/*
 * Codegraph Embedscope - Multi-model code embedding comparison
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, Location)
 * - features/    : Vertical slices (corpus → parsing | lexical → embedding → projection → visualization)
 * - pipeline/    : Orchestration
 * - config/      : Presets, stage configs, YAML v1
 *
 * Parallelism:
 * - Rayon for per-snippet analysis and per-backend embedding
 * - No shared mutable state between snippets or backends
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::needless_range_loop)] // Range loop for matrix indexing

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (corpus, parsing, lexical, embedding, projection, visualization)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{EmbedScopeError, Result};
pub use features::corpus::{Corpus, Snippet};
pub use features::embedding::{
    BackendEmbedding, BackendError, EmbeddingBackend, EmbeddingGenerator, EmbeddingMatrix,
    EncodeOptions, HashingBackend, UnloadedBackend,
};
pub use features::lexical::{tokenize, untokenize, LexError, Token, TokenKind, TokenStream};
pub use features::parsing::{
    analyze, ParseError, PatternKind, PythonAnalyzer, StructuralAnalyzer, StructuralFacts,
};
pub use features::projection::{PcaProjector, ProjectedPoints, ProjectionError};
pub use features::visualization::{MemorySink, PlotSink, RenderError, SvgScatterSink};
pub use pipeline::{BackendFailure, BackendReport, ComparisonPipeline, PipelineReport, SnippetReport};
