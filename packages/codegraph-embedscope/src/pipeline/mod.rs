//! Pipeline orchestration
//!
//! ```text
//! Corpus ─┬─ per snippet (parallel) ─▶ StructuralFacts | ParseError
//!         │                          └▶ TokenStream    | LexError
//!         └─ per backend ─▶ EmbeddingMatrix ─▶ ProjectedPoints | BackendFailure
//!                                                   │
//!                                                   ▼
//!                                               PlotSink
//! ```

mod orchestrator;
mod result;

pub use orchestrator::ComparisonPipeline;
pub use result::{BackendFailure, BackendReport, PipelineReport, SnippetReport};
