//! Notebook document model and reader.
//!
//! A Quill notebook (`.qnb`) is a JSON document holding an ordered list of
//! cells. Code cells carry Quill source; markdown and raw cells are prose
//! the runtime skips. This crate only models and reads the format;
//! executing code cells is the import layer's job.

mod error;
mod model;

pub use error::NotebookError;
pub use model::{Cell, CellKind, CellSource, Notebook, FORMAT_VERSION, NOTEBOOK_EXT};
