//! JSON dataset loader with fallback parsing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{Result, VinotecaError};
use crate::record::Wine;

use super::source::{DatasetMetadata, SourceShape};

/// UTF-8 byte order mark.
const BOM: char = '\u{feff}';

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Accept a top-level single object when array parsing fails.
    pub single_object_fallback: bool,
    /// Retry array parsing on cleaned-up text when other attempts fail.
    pub cleanup_fallback: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            single_object_fallback: true,
            cleanup_fallback: true,
        }
    }
}

/// Loads wine datasets from JSON files.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a new loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return its records and metadata.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(Vec<Wine>, DatasetMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| VinotecaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| VinotecaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let (wines, shape) = self
            .parse_bytes(&contents)
            .map_err(|source| VinotecaError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let metadata = DatasetMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            shape,
            wines.len(),
        );

        info!(
            file = %metadata.file,
            records = metadata.record_count,
            shape = %shape,
            "Loaded wine dataset"
        );

        Ok((wines, metadata))
    }

    /// Parse in-memory JSON text.
    pub fn load_str(&self, text: &str) -> Result<(Vec<Wine>, SourceShape)> {
        Ok(self.parse_bytes(text.as_bytes())?)
    }

    /// Try each parse strategy in order, deriving flags on success.
    fn parse_bytes(&self, bytes: &[u8]) -> serde_json::Result<(Vec<Wine>, SourceShape)> {
        let (mut wines, shape) = self.parse_with_fallbacks(bytes)?;
        for wine in &mut wines {
            wine.refresh_flag();
        }
        Ok((wines, shape))
    }

    fn parse_with_fallbacks(&self, bytes: &[u8]) -> serde_json::Result<(Vec<Wine>, SourceShape)> {
        let array_error = match serde_json::from_slice::<Vec<Wine>>(bytes) {
            Ok(wines) => return Ok((wines, SourceShape::Array)),
            Err(e) => e,
        };
        debug!(error = %array_error, "Dataset is not a JSON array");

        let mut last_error = array_error;

        if self.config.single_object_fallback {
            match serde_json::from_slice::<Wine>(bytes) {
                Ok(wine) => return Ok((vec![wine], SourceShape::SingleObject)),
                Err(e) => {
                    debug!(error = %e, "Dataset is not a single JSON object");
                    last_error = e;
                }
            }
        }

        if !self.config.cleanup_fallback {
            return Err(last_error);
        }

        // Invalid UTF-8 sequences become U+FFFD rather than failing outright.
        let text = String::from_utf8_lossy(bytes);
        let cleaned = clean_text(&text);
        debug!(
            original_len = bytes.len(),
            cleaned_len = cleaned.len(),
            "Retrying dataset parse on cleaned text"
        );

        serde_json::from_str::<Vec<Wine>>(&cleaned).map(|wines| (wines, SourceShape::CleanedArray))
    }
}

/// Strip line breaks, surrounding whitespace and a leading byte order mark.
pub fn clean_text(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let trimmed = stripped.trim();
    trimmed.strip_prefix(BOM).unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_array() {
        let loader = Loader::new();
        let (wines, shape) = loader
            .load_str(r#"[{"country": "France", "points": 90}, {"country": "Chile"}]"#)
            .unwrap();

        assert_eq!(shape, SourceShape::Array);
        assert_eq!(wines.len(), 2);
        assert_eq!(wines[0].country_flag, "🇫🇷");
        assert_eq!(wines[1].country_flag, "🇨🇱");
    }

    #[test]
    fn test_load_empty_array() {
        let (wines, shape) = Loader::new().load_str("[]").unwrap();
        assert!(wines.is_empty());
        assert_eq!(shape, SourceShape::Array);
    }

    #[test]
    fn test_load_single_object() {
        let (wines, shape) = Loader::new()
            .load_str(r#"{"title": "Lone bottle", "country": "Spain"}"#)
            .unwrap();

        assert_eq!(shape, SourceShape::SingleObject);
        assert_eq!(wines.len(), 1);
        assert_eq!(wines[0].title, "Lone bottle");
        assert_eq!(wines[0].country_flag, "🇪🇸");
    }

    #[test]
    fn test_load_with_bom() {
        let text = "\u{feff}[{\"country\": \"Italy\"}]";
        let (wines, shape) = Loader::new().load_str(text).unwrap();

        assert_eq!(shape, SourceShape::CleanedArray);
        assert_eq!(wines[0].country, "Italy");
    }

    #[test]
    fn test_single_object_fallback_disabled() {
        let loader = Loader::with_config(LoaderConfig {
            single_object_fallback: false,
            cleanup_fallback: true,
        });
        assert!(loader.load_str(r#"{"title": "Lone bottle"}"#).is_err());
    }

    #[test]
    fn test_cleanup_fallback_disabled() {
        let loader = Loader::with_config(LoaderConfig {
            single_object_fallback: true,
            cleanup_fallback: false,
        });
        assert!(loader.load_str("\u{feff}[]").is_err());
    }

    #[test]
    fn test_malformed_json() {
        let result = Loader::new().load_str(r#"[{"country": "France"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_utf8_bytes() {
        assert!(Loader::new().parse_bytes(&[0xff, 0xfe, 0x00]).is_err());
    }

    #[test]
    fn test_invalid_utf8_inside_string_is_replaced() {
        let mut bytes = b"[{\"title\": \"Ros".to_vec();
        bytes.push(0xe9);
        bytes.extend_from_slice(b"\"}]");

        let (wines, shape) = Loader::new().parse_bytes(&bytes).unwrap();
        assert_eq!(shape, SourceShape::CleanedArray);
        assert_eq!(wines[0].title, "Ros\u{fffd}");
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  [1,\r\n2]\n "), "[1,2]");
        assert_eq!(clean_text("\u{feff}[]"), "[]");
        assert_eq!(clean_text("\n\u{feff}{}\n"), "{}");
    }
}
