//! Visualization domain

use thiserror::Error;

pub const PLOT_TITLE: &str = "PCA of Code Snippet Embeddings by Model";
pub const X_AXIS_LABEL: &str = "Principal Component 1";
pub const Y_AXIS_LABEL: &str = "Principal Component 2";

/// Sink could not render the clouds
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No point clouds to render")]
    NothingToRender,

    #[error("Point cloud '{label}' is empty")]
    EmptyCloud { label: String },

    #[error("Drawing backend error: {0}")]
    Backend(String),
}
