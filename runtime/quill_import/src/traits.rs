//! The finder/loader interface.

use std::path::PathBuf;
use std::rc::Rc;

use crate::context::ImportContext;
use crate::error::ImportError;
use crate::module::Module;

/// Decides whether a dotted import name can be resolved, and by which
/// loader. Finders sit in an ordered chain on the [`ImportContext`];
/// returning `None` declines the name and lets the next finder try.
pub trait ModuleFinder {
    fn find(&self, dotted: &str, search_path: &[PathBuf]) -> Option<Rc<dyn ModuleLoader>>;
}

/// Turns a resolved import name into a live module.
///
/// `load` takes `Rc<Self>` so the loader can stamp itself into the
/// module's identity metadata.
pub trait ModuleLoader {
    fn load(self: Rc<Self>, ctx: &ImportContext, dotted: &str) -> Result<Rc<Module>, ImportError>;
}
