//! Notebook reading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading a notebook file.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// The file could not be read.
    #[error("failed to read notebook `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid notebook JSON.
    #[error("malformed notebook: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document's format version is not one this runtime reads.
    #[error("unsupported notebook format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
