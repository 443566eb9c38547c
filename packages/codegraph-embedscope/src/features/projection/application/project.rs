//! Comparative projector

use tracing::debug;

use crate::config::ProjectionConfig;
use crate::features::embedding::EmbeddingMatrix;
use crate::features::projection::domain::{ProjectedPoints, ProjectionError};
use crate::features::projection::infrastructure::pca;

/// Projects one backend's embeddings onto its own two principal components
#[derive(Debug, Clone, Default)]
pub struct PcaProjector {
    config: ProjectionConfig,
}

impl PcaProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project every row of the matrix; output order follows row order
    pub fn project(&self, matrix: &EmbeddingMatrix) -> Result<ProjectedPoints, ProjectionError> {
        let (n, d) = matrix.shape();
        if n < 2 {
            return Err(ProjectionError::TooFewSnippets { found: n });
        }
        if d < 2 {
            return Err(ProjectionError::TooFewDimensions { found: d });
        }

        if let Some(((row, column), _)) = matrix
            .data
            .indexed_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ProjectionError::NonFiniteValue { row, column });
        }

        let data = matrix.data.mapv(f64::from);
        let result = pca::principal_scores(&data, &self.config);
        let explained_variance_ratio = result.explained_variance_ratio();

        debug!(
            "{}: projected {}x{} → {}x2 (explained variance {:.3}, {:.3})",
            matrix.backend,
            n,
            d,
            result.scores.len(),
            explained_variance_ratio[0],
            explained_variance_ratio[1]
        );

        Ok(ProjectedPoints {
            label: matrix.backend.clone(),
            points: result.scores,
            explained_variance_ratio,
        })
    }
}
