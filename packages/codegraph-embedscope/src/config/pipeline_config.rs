//! Pipeline configuration
//!
//! Main configuration struct with preset-based defaults and override support.

use std::path::Path;

use super::{
    error::{ConfigError, ConfigResult},
    io::{ConfigExportV1, ConfigOverrides},
    preset::Preset,
    stage_configs::*,
};

const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// Pipeline configuration (builder)
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Base preset
    pub(crate) preset: Preset,

    /// Stage-specific overrides
    pub(crate) analysis: Option<AnalysisConfig>,
    pub(crate) embedding: Option<EmbeddingConfig>,
    pub(crate) projection: Option<ProjectionConfig>,
    pub(crate) parallel: Option<ParallelConfig>,
}

impl PipelineConfig {
    /// Level 1: Create from preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            analysis: None,
            embedding: None,
            projection: None,
            parallel: None,
        }
    }

    /// Level 2: Override structural analysis
    pub fn analysis<F>(mut self, f: F) -> Self
    where
        F: FnOnce(AnalysisConfig) -> AnalysisConfig,
    {
        let base = self
            .analysis
            .take()
            .unwrap_or_else(|| AnalysisConfig::from_preset(self.preset));
        self.analysis = Some(f(base));
        self
    }

    /// Level 2: Override embedding generation
    pub fn embedding<F>(mut self, f: F) -> Self
    where
        F: FnOnce(EmbeddingConfig) -> EmbeddingConfig,
    {
        let base = self
            .embedding
            .take()
            .unwrap_or_else(|| EmbeddingConfig::from_preset(self.preset));
        self.embedding = Some(f(base));
        self
    }

    /// Level 2: Override projection
    pub fn projection<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ProjectionConfig) -> ProjectionConfig,
    {
        let base = self
            .projection
            .take()
            .unwrap_or_else(|| ProjectionConfig::from_preset(self.preset));
        self.projection = Some(f(base));
        self
    }

    /// Level 2: Override the worker pool
    pub fn parallel<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ParallelConfig) -> ParallelConfig,
    {
        let base = self
            .parallel
            .take()
            .unwrap_or_else(|| ParallelConfig::from_preset(self.preset));
        self.parallel = Some(f(base));
        self
    }

    /// Build and validate
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        if let Some(ref cfg) = self.analysis {
            cfg.validate()?;
        }
        if let Some(ref cfg) = self.embedding {
            cfg.validate()?;
        }
        if let Some(ref cfg) = self.projection {
            cfg.validate()?;
        }
        if let Some(ref cfg) = self.parallel {
            cfg.validate()?;
        }

        Ok(ValidatedConfig(self))
    }

    /// Level 3: Load from YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<ValidatedConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a YAML v1 document
    pub fn from_yaml_str(content: &str) -> ConfigResult<ValidatedConfig> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        if !SUPPORTED_VERSIONS.contains(&export.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset: Preset = export.preset.parse()?;
        let mut config = Self::preset(preset);

        if let Some(overrides) = export.overrides {
            config.analysis = overrides.analysis;
            config.embedding = overrides.embedding;
            config.projection = overrides.projection;
            config.parallel = overrides.parallel;
        }

        config.build()
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let overrides = ConfigOverrides {
            analysis: self.analysis.clone(),
            embedding: self.embedding.clone(),
            projection: self.projection.clone(),
            parallel: self.parallel.clone(),
        };
        let has_overrides = overrides.analysis.is_some()
            || overrides.embedding.is_some()
            || overrides.projection.is_some()
            || overrides.parallel.is_some();

        let export = ConfigExportV1 {
            version: 1,
            preset: self.preset.to_string(),
            overrides: has_overrides.then_some(overrides),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

/// Validated configuration (immutable, safe to use)
#[derive(Debug, Clone)]
pub struct ValidatedConfig(PipelineConfig);

impl ValidatedConfig {
    pub fn preset(&self) -> Preset {
        self.0.preset
    }

    /// Get effective analysis config
    pub fn analysis(&self) -> AnalysisConfig {
        self.0
            .analysis
            .clone()
            .unwrap_or_else(|| AnalysisConfig::from_preset(self.0.preset))
    }

    /// Get effective embedding config
    pub fn embedding(&self) -> EmbeddingConfig {
        self.0
            .embedding
            .clone()
            .unwrap_or_else(|| EmbeddingConfig::from_preset(self.0.preset))
    }

    /// Get effective projection config
    pub fn projection(&self) -> ProjectionConfig {
        self.0
            .projection
            .clone()
            .unwrap_or_else(|| ProjectionConfig::from_preset(self.0.preset))
    }

    /// Get effective parallel config
    pub fn parallel(&self) -> ParallelConfig {
        self.0
            .parallel
            .clone()
            .unwrap_or_else(|| ParallelConfig::from_preset(self.0.preset))
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        let embedding = self.embedding();
        format!(
            "preset={} batch_size={} parallel_backends={} max_retries={} workers={}",
            self.preset(),
            embedding.batch_size,
            embedding.parallel_backends,
            embedding.max_retries,
            self.parallel().num_workers
        )
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        self.0.to_yaml()
    }
}

impl Default for ValidatedConfig {
    /// Balanced preset; preset defaults are valid by construction
    fn default() -> Self {
        Self(PipelineConfig::preset(Preset::Balanced))
    }
}
