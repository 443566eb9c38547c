//! Test fixtures: snippet generators and mock embedding backends

use std::sync::Arc;

use codegraph_embedscope::{BackendError, EmbeddingBackend, EncodeOptions, HashingBackend};

/// Generate a minimal valid Python function
pub fn fixture_simple_function(name: &str) -> String {
    format!("def {name}(): pass")
}

/// Generate a Python file with N functions
pub fn fixture_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("def func_{i}(): pass\n"))
        .collect()
}

/// Generate a Python class with methods
pub fn fixture_simple_class(class_name: &str, method_count: usize) -> String {
    let methods: String = (0..method_count)
        .map(|i| format!("    def method_{i}(self): pass\n"))
        .collect();

    format!("class {class_name}:\n{methods}")
}

/// Generate a Python file with imports
pub fn fixture_with_imports(imports: &[&str]) -> String {
    let import_lines: String = imports
        .iter()
        .map(|imp| format!("import {imp}\n"))
        .collect();

    format!("{import_lines}def main(): pass\n")
}

/// Hashing backends with distinct seeds, one per dimension
pub fn hashing_backends(dims: &[usize]) -> Vec<Arc<dyn EmbeddingBackend>> {
    dims.iter()
        .enumerate()
        .map(|(i, &dim)| {
            Arc::new(HashingBackend::new(format!("hashing-{dim}"), dim).with_seed(i as u64))
                as Arc<dyn EmbeddingBackend>
        })
        .collect()
}

/// Returns one vector fewer than it was given texts
pub struct TruncatingBackend {
    pub dimension: usize,
}

impl EmbeddingBackend for TruncatingBackend {
    fn name(&self) -> &str {
        "truncating"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn encode(
        &self,
        texts: &[String],
        _options: &EncodeOptions,
    ) -> Result<Vec<Vec<f32>>, BackendError> {
        Ok(texts
            .iter()
            .skip(1)
            .map(|_| vec![0.5; self.dimension])
            .collect())
    }
}

/// Model that never loads
pub struct UnavailableBackend;

impl EmbeddingBackend for UnavailableBackend {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn dimension(&self) -> usize {
        768
    }

    fn encode(
        &self,
        _texts: &[String],
        _options: &EncodeOptions,
    ) -> Result<Vec<Vec<f32>>, BackendError> {
        Err(BackendError::unavailable("unavailable", "model files missing"))
    }
}

/// Returns fixed 1-d vectors (degenerate for projection)
pub struct ScalarBackend;

impl EmbeddingBackend for ScalarBackend {
    fn name(&self) -> &str {
        "scalar"
    }

    fn dimension(&self) -> usize {
        1
    }

    fn encode(
        &self,
        texts: &[String],
        _options: &EncodeOptions,
    ) -> Result<Vec<Vec<f32>>, BackendError> {
        Ok(texts.iter().map(|t| vec![t.len() as f32]).collect())
    }
}

/// Euclidean distances between all row pairs (i < j)
pub fn pairwise_distances(points: &[[f64; 2]]) -> Vec<f64> {
    let mut out = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dx = points[i][0] - points[j][0];
            let dy = points[i][1] - points[j][1];
            out.push((dx * dx + dy * dy).sqrt());
        }
    }
    out
}
