use std::path::PathBuf;

use thiserror::Error;

/// Hard failures of the framework layer.
///
/// Unrecognized folder names are not errors; they parse to the unsupported
/// framework instead.
#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Invalid mapping entry: {0}")]
    InvalidMapping(String),

    #[error("Failed to read mappings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse mappings file: {0}")]
    Json(#[from] serde_json::Error),
}
