// File: crates/data-loader/src/error.rs
// Summary: Failures surfaced by the loader; any of them skips rendering.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("payload does not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("record {index}: unparseable date {value:?}")]
    InvalidDate { index: usize, value: String },
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// True for shape problems in the payload, as opposed to getting it at all.
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_) | FetchError::InvalidDate { .. })
    }
}
