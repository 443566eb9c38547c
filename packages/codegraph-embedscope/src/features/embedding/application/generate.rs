//! Embedding generation use case

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::EmbeddingConfig;
use crate::features::corpus::Corpus;
use crate::features::embedding::domain::{BackendError, EmbeddingMatrix};
use crate::features::embedding::ports::EmbeddingBackend;

/// Result of embedding the corpus with one backend
#[derive(Debug, Clone)]
pub struct BackendEmbedding {
    pub backend: String,
    pub result: Result<EmbeddingMatrix, BackendError>,
}

/// Drives backends over a corpus and enforces snippet/vector alignment
#[derive(Debug, Clone, Default)]
pub struct EmbeddingGenerator {
    config: EmbeddingConfig,
}

impl EmbeddingGenerator {
    pub fn new(config: EmbeddingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    /// Embed the whole corpus with one backend
    ///
    /// Row i of the matrix belongs to snippet i + 1. An empty corpus yields a
    /// `(0, dimension)` matrix without calling the backend.
    pub fn embed(
        &self,
        corpus: &Corpus,
        backend: &dyn EmbeddingBackend,
    ) -> Result<EmbeddingMatrix, BackendError> {
        let name = backend.name();

        if corpus.is_empty() {
            debug!("{}: empty corpus, skipping encode", name);
            return Ok(EmbeddingMatrix::empty(name, backend.dimension()));
        }

        let texts = corpus.texts();
        let vectors = self.encode_with_retry(&texts, backend)?;

        if vectors.len() != texts.len() {
            return Err(BackendError::LengthMismatch {
                backend: name.to_string(),
                expected: texts.len(),
                actual: vectors.len(),
            });
        }

        let matrix = EmbeddingMatrix::from_rows(name, vectors, backend.dimension())?;
        debug!("{}: embedding matrix {:?}", name, matrix.shape());
        Ok(matrix)
    }

    /// Embed the corpus with every backend, one result per backend in input order
    ///
    /// A failing backend never prevents the others from completing.
    pub fn embed_all(
        &self,
        corpus: &Corpus,
        backends: &[Arc<dyn EmbeddingBackend>],
    ) -> Vec<BackendEmbedding> {
        let run = |backend: &Arc<dyn EmbeddingBackend>| {
            let result = self.embed(corpus, backend.as_ref());
            if let Err(ref e) = result {
                warn!("{}", e);
            }
            BackendEmbedding {
                backend: backend.name().to_string(),
                result,
            }
        };

        #[cfg(feature = "parallel")]
        let results: Vec<BackendEmbedding> = if self.config.parallel_backends {
            backends.par_iter().map(run).collect()
        } else {
            backends.iter().map(run).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<BackendEmbedding> = backends.iter().map(run).collect();

        let succeeded = results.iter().filter(|r| r.result.is_ok()).count();
        info!(
            "Embedded {} snippets with {}/{} backends",
            corpus.len(),
            succeeded,
            backends.len()
        );
        results
    }

    fn encode_with_retry(
        &self,
        texts: &[String],
        backend: &dyn EmbeddingBackend,
    ) -> Result<Vec<Vec<f32>>, BackendError> {
        let options = self.config.encode_options();
        let mut attempt = 0;

        loop {
            match backend.encode(texts, &options) {
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(
                        "{}: attempt {}/{} failed, retrying: {}",
                        backend.name(),
                        attempt,
                        self.config.max_retries + 1,
                        e
                    );
                }
                result => return result,
            }
        }
    }
}
