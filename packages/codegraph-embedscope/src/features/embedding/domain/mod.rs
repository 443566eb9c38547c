//! Embedding domain models

mod error;
mod matrix;

pub use error::BackendError;
pub use matrix::EmbeddingMatrix;
