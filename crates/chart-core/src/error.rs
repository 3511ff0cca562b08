// File: crates/chart-core/src/error.rs
// Summary: Render-time failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("dataset is empty; nothing to render")]
    EmptyDataset,
    #[error("viewport {width}x{height} leaves no plot area inside padding {padding}")]
    InvalidViewport { width: u32, height: u32, padding: u32 },
    #[error("surface error: {0}")]
    Surface(String),
}
