//! Projection application layer

mod project;

pub use project::PcaProjector;
