//! SVG scatter sink (plotters)

use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::features::projection::ProjectedPoints;
use crate::features::visualization::domain::{
    RenderError, PLOT_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::features::visualization::ports::PlotSink;

const POINT_RADIUS: i32 = 5;
const RANGE_PADDING: f64 = 0.1;

/// Overlay scatter of all clouds, one colored series per backend
#[derive(Debug, Clone)]
pub struct SvgScatterSink {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgScatterSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: (1000, 800),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlotSink for SvgScatterSink {
    fn render(&mut self, clouds: &[ProjectedPoints]) -> Result<(), RenderError> {
        if clouds.is_empty() {
            return Err(RenderError::NothingToRender);
        }
        if let Some(cloud) = clouds.iter().find(|c| c.is_empty()) {
            return Err(RenderError::EmptyCloud {
                label: cloud.label.clone(),
            });
        }

        let (x_range, y_range) = axis_ranges(clouds);

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(backend_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(PLOT_TITLE, ("sans-serif", 22))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(backend_error)?;

        chart
            .configure_mesh()
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .draw()
            .map_err(backend_error)?;

        for (i, cloud) in clouds.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            chart
                .draw_series(
                    cloud
                        .points
                        .iter()
                        .map(|p| Circle::new((p[0], p[1]), POINT_RADIUS, color.filled())),
                )
                .map_err(backend_error)?
                .label(cloud.label.clone())
                .legend(move |(x, y)| Circle::new((x, y), POINT_RADIUS, color.filled()));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(backend_error)?;

        root.present().map_err(backend_error)?;
        info!("Wrote scatter plot to {}", self.path.display());
        Ok(())
    }
}

fn backend_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Shared axis ranges over every cloud, padded so no point sits on the frame
fn axis_ranges(clouds: &[ProjectedPoints]) -> (Range<f64>, Range<f64>) {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];

    for (lo, hi) in clouds.iter().filter_map(ProjectedPoints::bounds) {
        for axis in 0..2 {
            min[axis] = min[axis].min(lo[axis]);
            max[axis] = max[axis].max(hi[axis]);
        }
    }

    let padded = |axis: usize| {
        let span = max[axis] - min[axis];
        let pad = if span > 0.0 { span * RANGE_PADDING } else { 1.0 };
        (min[axis] - pad)..(max[axis] + pad)
    };

    (padded(0), padded(1))
}
