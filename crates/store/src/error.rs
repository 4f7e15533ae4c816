use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing game files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file or directory failed
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON for the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A preset declared a size with a zero dimension
    #[error("invalid preset size {width}x{height}")]
    InvalidSize { width: usize, height: usize },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
