//! Import errors.

use std::path::PathBuf;

use thiserror::Error;

use quill_eval::EvalError;
use quill_notebook::NotebookError;

/// Errors produced while importing a module.
///
/// A resolution miss is not represented here: finders decline by
/// returning `None`, and only a fully exhausted finder chain becomes
/// [`ImportError::ModuleNotFound`].
#[derive(Debug, Error)]
pub enum ImportError {
    /// No finder could resolve the dotted name.
    #[error("no module named `{0}`")]
    ModuleNotFound(String),

    /// A loader re-ran location for a name its finder had already
    /// resolved, and the file was gone.
    #[error("source for module `{0}` disappeared before it could be loaded")]
    SourceVanished(String),

    /// The resolved notebook could not be read or parsed.
    #[error(transparent)]
    Notebook(#[from] NotebookError),

    /// A plain source file could not be read.
    #[error("failed to read module source `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Executing the module's code failed.
    #[error("error while executing module `{name}`: {source}")]
    Execution {
        name: String,
        #[source]
        source: EvalError,
    },
}
