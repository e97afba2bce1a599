//! Import seam between the evaluator and the module system.
//!
//! The evaluator knows how to execute an `import` statement only in the
//! abstract: it hands the dotted module name to an [`Importer`] and binds
//! whatever value comes back. The concrete import machinery lives in a
//! higher layer and plugs in through this trait.

use crate::errors::{EvalError, EvalResult};
use crate::value::Value;

/// Resolves dotted module names to values on behalf of executing code.
pub trait Importer {
    /// Import the module named by `dotted` (e.g. `"Analysis.Notes"`) and
    /// return the value to bind.
    fn import(&self, dotted: &str) -> EvalResult<Value>;
}

/// An importer that refuses every import. Useful for contexts that
/// execute expressions but must not touch the module system.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoImports;

impl Importer for NoImports {
    fn import(&self, _dotted: &str) -> EvalResult<Value> {
        Err(EvalError::ImportUnavailable)
    }
}
