//! Projected point cloud

use serde::{Deserialize, Serialize};

/// One backend's snippets in its own 2D principal-component plane
///
/// `points[i]` belongs to snippet i + 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoints {
    /// Display label (the backend name)
    pub label: String,
    pub points: Vec<[f64; 2]>,
    /// Share of total variance captured by each component
    pub explained_variance_ratio: [f64; 2],
}

impl ProjectedPoints {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Euclidean distance between two projected snippets (0-based rows)
    pub fn distance(&self, a: usize, b: usize) -> Option<f64> {
        let p = self.points.get(a)?;
        let q = self.points.get(b)?;
        Some(((p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2)).sqrt())
    }

    /// (min, max) over both axes, for plot ranges
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points[1..] {
            for axis in 0..2 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some((min, max))
    }
}
