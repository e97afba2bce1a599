//! Live module objects.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use quill_eval::SharedNs;

use crate::traits::ModuleLoader;

/// A loaded module: a namespace plus identity metadata.
///
/// Modules live in the [`ImportContext`](crate::ImportContext) registry
/// under their dotted name; repeat imports hand back the same `Rc`.
pub struct Module {
    name: Rc<str>,
    path: PathBuf,
    ns: SharedNs,
    loader: Rc<dyn ModuleLoader>,
}

impl Module {
    pub fn new(
        name: impl Into<Rc<str>>,
        path: PathBuf,
        ns: SharedNs,
        loader: Rc<dyn ModuleLoader>,
    ) -> Self {
        Module {
            name: name.into(),
            path,
            ns,
            loader,
        }
    }

    /// The dotted name this module was imported as.
    pub fn name(&self) -> &Rc<str> {
        &self.name
    }

    /// The file the module was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The module's attribute namespace.
    pub fn ns(&self) -> &SharedNs {
        &self.ns
    }

    /// The loader that created this module.
    pub fn loader(&self) -> &Rc<dyn ModuleLoader> {
        &self.loader
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
