//! Embedding backend port (interface)

use crate::features::embedding::domain::BackendError;

/// Options forwarded to every `encode` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub batch_size: usize,
    pub show_progress: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            batch_size: 4,
            show_progress: true,
        }
    }
}

/// Pretrained text-embedding model behind a uniform interface
///
/// `encode` receives the whole corpus in order and must return one vector
/// per input text, in the same order, all of length `dimension()`. The
/// generator checks both; implementations must not pad or truncate.
pub trait EmbeddingBackend: Send + Sync {
    /// Stable identifier used in reports and plot legends
    fn name(&self) -> &str;

    /// Vector length this backend produces
    fn dimension(&self) -> usize;

    fn encode(
        &self,
        texts: &[String],
        options: &EncodeOptions,
    ) -> Result<Vec<Vec<f32>>, BackendError>;
}
