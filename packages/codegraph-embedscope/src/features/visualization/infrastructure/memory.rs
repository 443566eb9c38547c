//! In-memory sink

use crate::features::projection::ProjectedPoints;
use crate::features::visualization::domain::RenderError;
use crate::features::visualization::ports::PlotSink;

/// Keeps the clouds it receives
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    clouds: Vec<ProjectedPoints>,
    renders: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clouds from the most recent render
    pub fn clouds(&self) -> &[ProjectedPoints] {
        &self.clouds
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn labels(&self) -> Vec<&str> {
        self.clouds.iter().map(|c| c.label.as_str()).collect()
    }
}

impl PlotSink for MemorySink {
    fn render(&mut self, clouds: &[ProjectedPoints]) -> Result<(), RenderError> {
        self.clouds = clouds.to_vec();
        self.renders += 1;
        Ok(())
    }
}
