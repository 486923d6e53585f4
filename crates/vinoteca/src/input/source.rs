//! Dataset source metadata.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which loader strategy produced the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceShape {
    /// Top-level array of wine objects.
    Array,
    /// A single wine object, wrapped into a one-element dataset.
    SingleObject,
    /// Array parsed after stripping line breaks, whitespace and BOM.
    CleanedArray,
}

impl fmt::Display for SourceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceShape::Array => write!(f, "array"),
            SourceShape::SingleObject => write!(f, "single-object"),
            SourceShape::CleanedArray => write!(f, "cleaned-array"),
        }
    }
}

/// Metadata about the dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// How the content was parsed.
    pub shape: SourceShape,
    /// Number of records loaded.
    pub record_count: usize,
    /// When the dataset was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl DatasetMetadata {
    /// Create metadata for a file that has just been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        shape: SourceShape,
        record_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            shape,
            record_count,
            loaded_at: Utc::now(),
        }
    }
}
