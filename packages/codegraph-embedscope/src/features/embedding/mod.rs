//! Embedding Feature - per-backend embedding generation
//!
//! The core only depends on the [`EmbeddingBackend`] port. Every backend
//! encodes the full corpus in one call and must return exactly one vector
//! per snippet, in corpus order, all of one dimension:
//!
//! ```text
//! Corpus (n snippets) ──encode──▶ Vec<Vec<f32>> ──validate──▶ EmbeddingMatrix (n × d)
//! ```
//!
//! A backend that breaks alignment fails on its own; other backends in the
//! same run are unaffected.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::{BackendEmbedding, EmbeddingGenerator};
pub use domain::{BackendError, EmbeddingMatrix};
pub use infrastructure::{HashingBackend, UnloadedBackend};
#[cfg(feature = "fastembed")]
pub use infrastructure::{FastEmbedBackend, FastEmbedPreset};
pub use ports::{EmbeddingBackend, EncodeOptions};
