//! Placeholder for a backend whose model failed to load
//!
//! Keeps the backend in the run so its load failure is reported like any
//! other per-backend failure.

use tracing::debug;

use crate::features::embedding::domain::BackendError;
use crate::features::embedding::ports::{EmbeddingBackend, EncodeOptions};

#[derive(Debug, Clone)]
pub struct UnloadedBackend {
    name: String,
    dimension: usize,
    error: BackendError,
}

impl UnloadedBackend {
    pub fn new(name: impl Into<String>, dimension: usize, error: BackendError) -> Self {
        Self {
            name: name.into(),
            dimension,
            error,
        }
    }

    pub fn error(&self) -> &BackendError {
        &self.error
    }
}

impl EmbeddingBackend for UnloadedBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn encode(
        &self,
        _texts: &[String],
        _options: &EncodeOptions,
    ) -> Result<Vec<Vec<f32>>, BackendError> {
        debug!("{}: not loaded, reporting load failure", self.name);
        Err(self.error.clone())
    }
}
