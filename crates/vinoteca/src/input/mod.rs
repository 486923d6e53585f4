//! Dataset loading and source metadata.

mod loader;
mod source;

pub use loader::{clean_text, Loader, LoaderConfig};
pub use source::{DatasetMetadata, SourceShape};
