//! Embedding application layer

mod generate;

pub use generate::{BackendEmbedding, EmbeddingGenerator};
