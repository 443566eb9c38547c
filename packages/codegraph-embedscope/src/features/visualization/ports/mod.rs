//! Plot sink port (interface)

use crate::features::projection::ProjectedPoints;
use crate::features::visualization::domain::RenderError;

/// Receives every backend's projected cloud for one overlay scatter
pub trait PlotSink {
    fn render(&mut self, clouds: &[ProjectedPoints]) -> Result<(), RenderError>;
}
