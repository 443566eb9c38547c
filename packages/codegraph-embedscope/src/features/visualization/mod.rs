//! Visualization Feature - scatter sinks for projected point clouds
//!
//! Rendering is presentation only: a sink receives one labeled cloud per
//! backend and decides how to draw it.

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{RenderError, PLOT_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
pub use infrastructure::{MemorySink, SvgScatterSink};
pub use ports::PlotSink;
