//! Embedding matrix

use ndarray::{Array2, ArrayView1};

use super::BackendError;

/// n × d embeddings of one backend; row i belongs to snippet i + 1
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix {
    pub backend: String,
    pub data: Array2<f32>,
}

impl EmbeddingMatrix {
    pub fn new(backend: impl Into<String>, data: Array2<f32>) -> Self {
        Self {
            backend: backend.into(),
            data,
        }
    }

    /// Zero-row matrix that still reports the backend's dimension
    pub fn empty(backend: impl Into<String>, dimension: usize) -> Self {
        Self::new(backend, Array2::zeros((0, dimension)))
    }

    /// Validate and pack raw backend output
    ///
    /// `declared` is the dimension the backend advertises; 0 means "take it
    /// from the first vector". Rows are never padded or truncated.
    pub fn from_rows(
        backend: &str,
        rows: Vec<Vec<f32>>,
        declared: usize,
    ) -> Result<Self, BackendError> {
        let expected = match (declared, rows.first()) {
            (0, Some(first)) => first.len(),
            (d, _) => d,
        };

        for (row, vector) in rows.iter().enumerate() {
            if vector.len() != expected {
                return Err(BackendError::DimensionMismatch {
                    backend: backend.to_string(),
                    row,
                    expected,
                    actual: vector.len(),
                });
            }
        }

        let n = rows.len();
        let flat: Vec<f32> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n, expected), flat)
            .map_err(|e| BackendError::runtime(backend, e.to_string()))?;

        Ok(Self::new(backend, data))
    }

    /// Number of snippets
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    pub fn dimension(&self) -> usize {
        self.data.ncols()
    }

    pub fn row(&self, i: usize) -> Option<ArrayView1<'_, f32>> {
        (i < self.len()).then(|| self.data.row(i))
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }
}
