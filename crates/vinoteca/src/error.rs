//! Error types for the Vinoteca library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Vinoteca operations.
#[derive(Debug, Error)]
pub enum VinotecaError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset content could not be parsed by any of the loader's strategies.
    #[error("Failed to parse dataset '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Vinoteca operations.
pub type Result<T> = std::result::Result<T, VinotecaError>;
