//! Feature-hashing backend
//!
//! Deterministic, offline embedder: identifier-like words and character
//! trigrams are hashed with blake3 into a fixed number of signed buckets,
//! then the vector is L2-normalised. Different seeds give unrelated spaces
//! of the same dimension, which makes it a stand-in for distinct models.

use tracing::{debug, info};

use crate::features::embedding::domain::BackendError;
use crate::features::embedding::ports::{EmbeddingBackend, EncodeOptions};

const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct HashingBackend {
    name: String,
    dimension: usize,
    seed: u64,
}

impl HashingBackend {
    pub fn new(name: impl Into<String>, dimension: usize) -> Self {
        Self {
            name: name.into(),
            dimension,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Embed a single text
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        if self.dimension == 0 {
            return vector;
        }

        for word in words(text) {
            self.add_feature(&mut vector, b"w", word.as_bytes(), WORD_WEIGHT);
        }

        let chars: Vec<char> = text.chars().collect();
        for window in chars.windows(3) {
            let trigram: String = window.iter().collect();
            self.add_feature(&mut vector, b"c", trigram.as_bytes(), TRIGRAM_WEIGHT);
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }

    fn add_feature(&self, vector: &mut [f32], namespace: &[u8], feature: &[u8], weight: f32) {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(namespace);
        hasher.update(feature);
        let hash = hasher.finalize();
        let bytes = hash.as_bytes();

        let mut bucket = [0u8; 8];
        bucket.copy_from_slice(&bytes[..8]);
        let index = (u64::from_le_bytes(bucket) % self.dimension as u64) as usize;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };

        vector[index] += sign * weight;
    }
}

impl EmbeddingBackend for HashingBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn encode(
        &self,
        texts: &[String],
        options: &EncodeOptions,
    ) -> Result<Vec<Vec<f32>>, BackendError> {
        if self.dimension == 0 {
            return Err(BackendError::unavailable(
                &self.name,
                "hashing backend needs a dimension of at least 1",
            ));
        }

        let batch_size = options.batch_size.max(1);
        let total_batches = texts.len().div_ceil(batch_size);
        let mut vectors = Vec::with_capacity(texts.len());

        for (batch, chunk) in texts.chunks(batch_size).enumerate() {
            vectors.extend(chunk.iter().map(|text| self.embed_text(text)));
            if options.show_progress {
                info!("{}: batch {}/{}", self.name, batch + 1, total_batches);
            }
        }

        debug!("{}: encoded {} texts", self.name, vectors.len());
        Ok(vectors)
    }
}

/// Identifier-like runs (letters, digits, underscore)
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
}
