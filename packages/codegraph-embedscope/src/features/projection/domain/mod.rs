//! Projection domain models

mod error;
mod points;

pub use error::ProjectionError;
pub use points::ProjectedPoints;
