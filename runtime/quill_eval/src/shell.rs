//! The execution shell.
//!
//! A [`Shell`] owns the interner and the ambient *user namespace*: the
//! namespace that interactive execution writes into by default. Module
//! loading temporarily points the ambient slot at the module's own
//! namespace while its cells run, then restores it, so code written for
//! interactive use executes unchanged inside a module.

use std::cell::RefCell;

use quill_ir::SharedInterner;

use crate::errors::EvalResult;
use crate::evaluator::Evaluator;
use crate::importer::Importer;
use crate::namespace::{Namespace, SharedNs};
use crate::value::Value;

/// Shared execution state: the interner plus the ambient user namespace.
pub struct Shell {
    interner: SharedInterner,
    user_ns: RefCell<SharedNs>,
}

impl Shell {
    /// Create a shell with an empty user namespace.
    pub fn new() -> Self {
        Shell {
            interner: SharedInterner::new(),
            user_ns: RefCell::new(Namespace::shared()),
        }
    }

    /// The shell's interner.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// The current ambient user namespace.
    pub fn user_ns(&self) -> SharedNs {
        self.user_ns.borrow().clone()
    }

    /// Point the ambient user namespace at `ns` until the returned guard
    /// drops, then restore the previous namespace.
    pub fn redirect_user_ns(&self, ns: SharedNs) -> UserNsGuard<'_> {
        let saved = self.user_ns.replace(ns);
        UserNsGuard {
            shell: self,
            saved: Some(saved),
        }
    }

    /// Parse and execute `source` against `ns`, resolving imports through
    /// `importer`. Returns the value of the last bare expression.
    pub fn execute(
        &self,
        source: &str,
        ns: &SharedNs,
        importer: &dyn Importer,
    ) -> EvalResult<Value> {
        tracing::trace!(bytes = source.len(), "executing source");
        let program = quill_syntax::parse_program(source, &self.interner)?;
        Evaluator::new(&self.interner, &program, ns, importer).run()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new()
    }
}

/// Restores the shell's previous user namespace on drop, even when cell
/// execution fails partway.
pub struct UserNsGuard<'a> {
    shell: &'a Shell,
    saved: Option<SharedNs>,
}

impl Drop for UserNsGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            *self.shell.user_ns.borrow_mut() = saved;
        }
    }
}
