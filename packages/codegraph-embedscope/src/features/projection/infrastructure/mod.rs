//! Projection infrastructure

pub mod pca;
