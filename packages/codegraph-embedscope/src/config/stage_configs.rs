//! Stage-specific configuration types
//!
//! Each pipeline stage has its own configuration struct with validation.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::features::embedding::EncodeOptions;
use serde::{Deserialize, Serialize};

// ============================================================================
// Structural analysis
// ============================================================================

/// Structural analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Record the first symbol of `from m import a` statements as an import
    pub capture_from_imports: bool,
}

impl AnalysisConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    /// Builder: Set capture_from_imports
    pub fn capture_from_imports(mut self, v: bool) -> Self {
        self.capture_from_imports = v;
        self
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast | Preset::Balanced => Self {
                capture_from_imports: false,
            },
            Preset::Thorough => Self {
                capture_from_imports: true,
            },
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

// ============================================================================
// Embedding
// ============================================================================

/// Embedding generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Texts per backend batch (1..=1024)
    pub batch_size: usize,

    /// Log per-batch progress
    pub show_progress: bool,

    /// Run backends concurrently (sequential unless enabled)
    pub parallel_backends: bool,

    /// Extra attempts after a transient backend failure (0..=10)
    pub max_retries: u32,
}

impl EmbeddingConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.batch_size == 0 || self.batch_size > 1024 {
            return Err(ConfigError::range_with_hint(
                "batch_size",
                self.batch_size,
                1,
                1024,
                "Batch size must be at least 1",
            ));
        }

        if self.max_retries > 10 {
            return Err(ConfigError::range_with_hint(
                "max_retries",
                self.max_retries,
                0,
                10,
                "Retries only help with transient backend failures",
            ));
        }

        Ok(())
    }

    /// Options passed to each backend's encode call
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            batch_size: self.batch_size,
            show_progress: self.show_progress,
        }
    }

    /// Builder: Set batch_size
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Builder: Set show_progress
    pub fn show_progress(mut self, v: bool) -> Self {
        self.show_progress = v;
        self
    }

    /// Builder: Set parallel_backends
    pub fn parallel_backends(mut self, v: bool) -> Self {
        self.parallel_backends = v;
        self
    }

    /// Builder: Set max_retries
    pub fn max_retries(mut self, v: u32) -> Self {
        self.max_retries = v;
        self
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                batch_size: 32,
                show_progress: false,
                parallel_backends: true,
                max_retries: 0,
            },
            Preset::Balanced => Self {
                batch_size: 4,
                show_progress: true,
                parallel_backends: false,
                max_retries: 0,
            },
            Preset::Thorough => Self {
                batch_size: 4,
                show_progress: true,
                parallel_backends: false,
                max_retries: 2,
            },
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

// ============================================================================
// Projection
// ============================================================================

/// PCA projection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Power-iteration cap per component (10..=100000)
    pub max_iterations: usize,

    /// Convergence threshold on the eigenvector change (0.0 < t <= 1e-3)
    pub tolerance: f64,
}

impl ProjectionConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_iterations < 10 || self.max_iterations > 100_000 {
            return Err(ConfigError::range_with_hint(
                "max_iterations",
                self.max_iterations,
                10,
                100_000,
                "Power iteration needs at least 10 steps to converge",
            ));
        }

        if !(self.tolerance > 0.0 && self.tolerance <= 1e-3) {
            return Err(ConfigError::Validation(format!(
                "tolerance must be in (0.0, 1e-3], got {}",
                self.tolerance
            )));
        }

        Ok(())
    }

    /// Builder: Set max_iterations
    pub fn max_iterations(mut self, v: usize) -> Self {
        self.max_iterations = v;
        self
    }

    /// Builder: Set tolerance
    pub fn tolerance(mut self, v: f64) -> Self {
        self.tolerance = v;
        self
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                max_iterations: 200,
                tolerance: 1e-6,
            },
            Preset::Balanced => Self {
                max_iterations: 1000,
                tolerance: 1e-9,
            },
            Preset::Thorough => Self {
                max_iterations: 10_000,
                tolerance: 1e-12,
            },
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

// ============================================================================
// Parallel
// ============================================================================

/// Worker pool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Number of workers (0=auto, 1..=256)
    pub num_workers: usize,
}

impl ParallelConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_workers > 256 {
            return Err(ConfigError::range_with_hint(
                "num_workers",
                self.num_workers,
                0,
                256,
                "Number of workers must be reasonable (0=auto)",
            ));
        }

        Ok(())
    }

    /// Builder: Set num_workers
    pub fn num_workers(mut self, v: usize) -> Self {
        self.num_workers = v;
        self
    }

    /// Get preset configuration
    pub fn from_preset(_preset: Preset) -> Self {
        Self { num_workers: 0 }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}
