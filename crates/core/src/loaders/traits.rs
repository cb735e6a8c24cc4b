use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::dataset::Dataset;

/// Input encodings a dataset can be read from.
///
/// The caller always names the encoding; nothing in the library guesses
/// it from file extensions or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Delimited text with a header row
    Csv,
    /// JSON object with a top-level `records` array
    Json,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "CSV"),
            SourceFormat::Json => write!(f, "JSON"),
        }
    }
}

/// A way of turning raw input into a validated `Dataset`.
///
/// Each input encoding implements this trait. Implementations must keep
/// records in input order and fail on the first invalid record.
pub trait DatasetLoader: Send + Sync {
    /// Human-readable name of this loader (for logs/errors).
    fn name(&self) -> &str;

    /// The encoding this loader understands.
    fn format(&self) -> SourceFormat;

    /// Decode and validate a dataset held in memory.
    fn load_from_bytes(&self, data: &[u8]) -> Result<Dataset, CoreError>;

    /// Read a file fully, then decode it with `load_from_bytes`.
    fn load_from_file(&self, path: &Path) -> Result<Dataset, CoreError> {
        let bytes = std::fs::read(path)
            .map_err(|e| CoreError::SourceNotFound(format!("{}: {e}", path.display())))?;
        log::debug!(
            "{}: read {} bytes from {}",
            self.name(),
            bytes.len(),
            path.display()
        );
        self.load_from_bytes(&bytes)
    }
}
