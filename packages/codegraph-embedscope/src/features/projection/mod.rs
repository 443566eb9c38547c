//! Projection Feature - per-backend 2D PCA
//!
//! Each backend's matrix is projected on its own two principal directions.
//! There is no shared basis, so coordinates are only comparable within one
//! point cloud; axis signs carry no meaning.
//!
//! # Algorithm
//! ```text
//! X (n × d) ─center─▶ C ─┬─ n ≤ d: G = C·Cᵀ (n × n), scores_k = √λ_k · u_k
//!                        └─ n > d: S = Cᵀ·C (d × d), scores_k = C · v_k
//! ```
//! Eigenpairs come from power iteration with deflation, so results are
//! deterministic for a fixed matrix and configuration.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports
pub use application::PcaProjector;
pub use domain::{ProjectedPoints, ProjectionError};
