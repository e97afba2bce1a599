//! Quill Eval - interpreter and interactive shell for the Quill runtime.
//!
//! This crate provides:
//! - `Value`: runtime values, including live module handles
//! - `Namespace` / `SharedNs`: the mutable symbol tables code executes against
//! - `Evaluator`: a tree-walking interpreter over `quill_ir` programs
//! - `Shell`: the ambient interactive context (current user namespace,
//!   interactive-source transform, execute-source-against-namespace)
//! - `Importer`: the seam through which `import` statements reach the module
//!   machinery without this crate depending on it

mod errors;
mod evaluator;
mod importer;
mod namespace;
mod shared;
mod shell;
mod transform;
mod value;

pub use errors::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use importer::{Importer, NoImports};
pub use namespace::{Namespace, SharedNs};
pub use shared::Shared;
pub use shell::{Shell, UserNsGuard};
pub use transform::transform_source;
pub use value::{ModuleValue, Value};
