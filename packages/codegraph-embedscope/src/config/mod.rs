//! Configuration System
//!
//! Three levels, from most to least common:
//! - Level 1: Preset - one-liner
//! - Level 2: Stage override - closure adjusting one stage
//! - Level 3: YAML v1 file - complete control
//!
//! # Examples
//!
//! ```rust,ignore
//! use codegraph_embedscope::config::{PipelineConfig, Preset};
//!
//! let config = PipelineConfig::preset(Preset::Fast).build()?;
//!
//! let config = PipelineConfig::preset(Preset::Balanced)
//!     .embedding(|c| c.batch_size(8).max_retries(2))
//!     .build()?;
//!
//! let config = PipelineConfig::from_yaml("embedscope.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod pipeline_config;
pub mod preset;
pub mod stage_configs;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use pipeline_config::{PipelineConfig, ValidatedConfig};
pub use preset::Preset;
pub use stage_configs::{AnalysisConfig, EmbeddingConfig, ParallelConfig, ProjectionConfig};
