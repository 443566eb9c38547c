//! fastembed (ONNX Runtime) sentence-embedding backends

use std::sync::Arc;

use ::fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::features::embedding::domain::BackendError;
use crate::features::embedding::ports::{EmbeddingBackend, EncodeOptions};

use super::UnloadedBackend;

/// Pretrained models available through fastembed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastEmbedPreset {
    /// all-MiniLM-L6-v2, 384-d
    MiniLm,
    /// BAAI/bge-small-en-v1.5, 384-d
    BgeSmall,
    /// paraphrase-multilingual-mpnet-base-v2, 768-d
    MultilingualMpnet,
}

impl FastEmbedPreset {
    pub const ALL: [FastEmbedPreset; 3] = [
        FastEmbedPreset::MiniLm,
        FastEmbedPreset::BgeSmall,
        FastEmbedPreset::MultilingualMpnet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FastEmbedPreset::MiniLm => "all-MiniLM-L6-v2",
            FastEmbedPreset::BgeSmall => "bge-small-en-v1.5",
            FastEmbedPreset::MultilingualMpnet => "paraphrase-multilingual-mpnet-base-v2",
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            FastEmbedPreset::MiniLm | FastEmbedPreset::BgeSmall => 384,
            FastEmbedPreset::MultilingualMpnet => 768,
        }
    }

    fn model(&self) -> EmbeddingModel {
        match self {
            FastEmbedPreset::MiniLm => EmbeddingModel::AllMiniLML6V2,
            FastEmbedPreset::BgeSmall => EmbeddingModel::BGESmallENV15,
            FastEmbedPreset::MultilingualMpnet => EmbeddingModel::ParaphraseMLMpnetBaseV2,
        }
    }
}

/// Pre-loaded fastembed model
///
/// Loading downloads the model on first use; a failure surfaces as
/// `BackendError::Unavailable` for this backend only.
pub struct FastEmbedBackend {
    preset: FastEmbedPreset,
    model: Mutex<TextEmbedding>,
}

impl FastEmbedBackend {
    pub fn load(preset: FastEmbedPreset) -> Result<Self, BackendError> {
        info!("Loading fastembed model {}", preset.name());
        let model = TextEmbedding::try_new(
            InitOptions::new(preset.model()).with_show_download_progress(false),
        )
        .map_err(|e| BackendError::unavailable(preset.name(), e.to_string()))?;

        Ok(Self {
            preset,
            model: Mutex::new(model),
        })
    }

    /// One backend per preset, in preset order
    ///
    /// A preset that fails to load stays in the set as an [`UnloadedBackend`]
    /// carrying its `Unavailable` error.
    pub fn load_all() -> Vec<Arc<dyn EmbeddingBackend>> {
        FastEmbedPreset::ALL
            .into_iter()
            .map(|preset| match Self::load(preset) {
                Ok(backend) => Arc::new(backend) as Arc<dyn EmbeddingBackend>,
                Err(e) => {
                    warn!("{}", e);
                    Arc::new(UnloadedBackend::new(preset.name(), preset.dimension(), e))
                        as Arc<dyn EmbeddingBackend>
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for FastEmbedBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastEmbedBackend")
            .field("preset", &self.preset)
            .finish_non_exhaustive()
    }
}

impl EmbeddingBackend for FastEmbedBackend {
    fn name(&self) -> &str {
        self.preset.name()
    }

    fn dimension(&self) -> usize {
        self.preset.dimension()
    }

    fn encode(
        &self,
        texts: &[String],
        options: &EncodeOptions,
    ) -> Result<Vec<Vec<f32>>, BackendError> {
        if options.show_progress {
            info!("{}: encoding {} texts", self.name(), texts.len());
        }

        let vectors = self
            .model
            .lock()
            .embed(texts.to_vec(), Some(options.batch_size.max(1)))
            .map_err(|e| BackendError::runtime(self.name(), e.to_string()))?;

        debug!("{}: received {} vectors", self.name(), vectors.len());
        Ok(vectors)
    }
}
