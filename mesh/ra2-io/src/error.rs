//! Error types for RA2 export.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for RA2 export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur during RA2 export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The object handed to the exporter does not carry mesh data.
    #[error("cannot export: object `{name}` is not a polygon mesh")]
    NotAMesh {
        /// Name of the offending object.
        name: String,
    },

    /// An output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path of the stream that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ExportError {
    /// Create an `Io` error carrying the failed path.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
