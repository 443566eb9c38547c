//! Two-component PCA by power iteration
//!
//! ```text
//! v_{t+1} = M·v_t / ‖M·v_t‖          until max|v_{t+1} − v_t| < tolerance
//! λ = vᵀ·M·v
//! M ← M − λ·v·vᵀ                      (deflation before the next component)
//! ```
//!
//! M is symmetric positive semi-definite (Gram or scatter matrix), so the
//! iteration converges to the dominant eigenpair without sign oscillation.

use ndarray::{Array1, Array2, Axis};
use tracing::debug;

use crate::config::ProjectionConfig;

/// Eigenvalues at or below this fraction of the trace are treated as zero
const RANK_EPSILON: f64 = 1e-12;

/// Scores on the two leading principal components
#[derive(Debug, Clone, PartialEq)]
pub struct PrincipalScores {
    /// Row i holds snippet i's coordinates
    pub scores: Vec<[f64; 2]>,
    pub eigenvalues: [f64; 2],
    /// Total sum of squares of the centered data
    pub total_variance: f64,
}

impl PrincipalScores {
    pub fn explained_variance_ratio(&self) -> [f64; 2] {
        if self.total_variance > 0.0 {
            [
                self.eigenvalues[0] / self.total_variance,
                self.eigenvalues[1] / self.total_variance,
            ]
        } else {
            [0.0, 0.0]
        }
    }
}

/// Subtract the column means
pub fn center(data: &Array2<f64>) -> Array2<f64> {
    match data.mean_axis(Axis(0)) {
        Some(mean) => data - &mean,
        None => data.clone(),
    }
}

/// Project rows of `data` onto its two leading principal directions
///
/// Works on the n × n Gram matrix when there are no more rows than
/// columns (the usual case for embeddings), otherwise on the d × d scatter
/// matrix. Each component's sign is fixed so that its largest-magnitude
/// score is positive.
pub fn principal_scores(data: &Array2<f64>, config: &ProjectionConfig) -> PrincipalScores {
    let centered = center(data);
    let (n, d) = centered.dim();
    let total_variance = centered.iter().map(|x| x * x).sum::<f64>();

    let mut columns: [Array1<f64>; 2] = [Array1::zeros(n), Array1::zeros(n)];
    let mut eigenvalues = [0.0; 2];

    if n <= d {
        let gram = centered.dot(&centered.t());
        for (k, (lambda, u)) in top_eigenpairs(gram, config).into_iter().enumerate() {
            eigenvalues[k] = lambda;
            columns[k] = u * lambda.sqrt();
        }
    } else {
        let scatter = centered.t().dot(&centered);
        for (k, (lambda, v)) in top_eigenpairs(scatter, config).into_iter().enumerate() {
            eigenvalues[k] = lambda;
            columns[k] = centered.dot(&v);
        }
    }

    for column in columns.iter_mut() {
        orient(column);
    }

    let scores = (0..n).map(|i| [columns[0][i], columns[1][i]]).collect();

    PrincipalScores {
        scores,
        eigenvalues,
        total_variance,
    }
}

/// Two leading eigenpairs of a symmetric PSD matrix, largest first
///
/// Missing rank yields a zero eigenvalue with a zero vector.
fn top_eigenpairs(mut matrix: Array2<f64>, config: &ProjectionConfig) -> Vec<(f64, Array1<f64>)> {
    let size = matrix.nrows();
    let floor = matrix.diag().sum().abs() * RANK_EPSILON;
    let mut pairs = Vec::with_capacity(2);

    for component in 0..2 {
        let (lambda, v) = dominant_eigenpair(&matrix, config, component);

        if size == 0 || lambda <= floor || !lambda.is_finite() {
            debug!("component {} is degenerate (λ = {:e})", component + 1, lambda);
            pairs.push((0.0, Array1::zeros(size)));
            continue;
        }

        let column = v.view().insert_axis(Axis(1));
        let row = v.view().insert_axis(Axis(0));
        matrix = matrix - column.dot(&row) * lambda;
        pairs.push((lambda, v));
    }

    pairs
}

fn dominant_eigenpair(
    matrix: &Array2<f64>,
    config: &ProjectionConfig,
    component: usize,
) -> (f64, Array1<f64>) {
    let mut v = initial_vector(matrix.nrows(), component);

    for iteration in 0..config.max_iterations {
        let w = matrix.dot(&v);
        let norm = w.dot(&w).sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return (0.0, v);
        }

        let next = w / norm;
        let delta = (&next - &v)
            .iter()
            .fold(0.0f64, |acc, x| acc.max(x.abs()));
        v = next;

        if delta < config.tolerance {
            debug!(
                "component {} converged in {} iterations",
                component + 1,
                iteration + 1
            );
            break;
        }
    }

    let lambda = v.dot(&matrix.dot(&v));
    (lambda, v)
}

/// Deterministic, non-uniform unit start vector
///
/// The all-ones direction lies in the null space of a centered Gram matrix,
/// so the start vector must not be uniform.
fn initial_vector(size: usize, component: usize) -> Array1<f64> {
    let v = Array1::from_iter(
        (0..size).map(|i| 1.0 + ((i * 7 + component * 13) % 17) as f64 / 17.0),
    );
    let norm = v.dot(&v).sqrt();
    if norm > 0.0 {
        v / norm
    } else {
        v
    }
}

/// Flip the column so its largest-magnitude entry is positive
fn orient(column: &mut Array1<f64>) {
    let mut pivot = 0.0f64;
    for &x in column.iter() {
        if x.abs() > pivot.abs() {
            pivot = x;
        }
    }
    if pivot < 0.0 {
        column.mapv_inplace(|x| -x);
    }
}
