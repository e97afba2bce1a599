//! The import context: all import-machinery state, in one place.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use quill_eval::{EvalError, EvalResult, Importer, ModuleValue, Shell, Value};

use crate::error::ImportError;
use crate::finder::{NotebookFinder, SourceFinder};
use crate::module::Module;
use crate::traits::ModuleFinder;

/// Process-scoped import state: the module registry, the search path,
/// and the finder chain. Created once at runtime startup and threaded
/// through explicitly; there are no process globals here.
pub struct ImportContext {
    shell: Rc<Shell>,
    search_path: RefCell<Vec<PathBuf>>,
    registry: RefCell<FxHashMap<String, Rc<Module>>>,
    finders: RefCell<Vec<Rc<dyn ModuleFinder>>>,
}

impl ImportContext {
    /// Create a context with the default finder chain: notebooks first,
    /// then plain source files.
    pub fn new(shell: Rc<Shell>) -> Self {
        ImportContext {
            shell,
            search_path: RefCell::new(Vec::new()),
            registry: RefCell::new(FxHashMap::default()),
            finders: RefCell::new(vec![
                Rc::new(NotebookFinder::new()),
                Rc::new(SourceFinder::new()),
            ]),
        }
    }

    /// The execution shell this context loads modules through.
    pub fn shell(&self) -> &Rc<Shell> {
        &self.shell
    }

    /// Append a directory to the search path.
    pub fn add_search_path(&self, dir: PathBuf) {
        self.search_path.borrow_mut().push(dir);
    }

    /// Insert a directory at the front of the search path, so it is
    /// consulted before everything already there.
    pub fn prepend_search_path(&self, dir: PathBuf) {
        self.search_path.borrow_mut().insert(0, dir);
    }

    /// Snapshot of the current search path.
    pub fn search_path(&self) -> Vec<PathBuf> {
        self.search_path.borrow().clone()
    }

    /// Append a finder to the chain.
    pub fn add_finder(&self, finder: Rc<dyn ModuleFinder>) {
        self.finders.borrow_mut().push(finder);
    }

    /// Insert a module into the registry under its dotted name.
    ///
    /// Loaders call this before executing any code, which is what makes
    /// circular imports terminate.
    pub fn register(&self, module: Rc<Module>) {
        self.registry
            .borrow_mut()
            .insert(module.name().to_string(), module);
    }

    /// Look up an already-registered module without triggering a load.
    pub fn registered(&self, dotted: &str) -> Option<Rc<Module>> {
        self.registry.borrow().get(dotted).cloned()
    }

    /// Import a module by dotted name.
    ///
    /// An already-registered name short-circuits to the existing module
    /// without touching the finders or the filesystem. Otherwise the
    /// finder chain runs in order; the first finder to resolve the name
    /// supplies the loader, and the loader's result (or failure) is the
    /// import's result. A fully exhausted chain is
    /// [`ImportError::ModuleNotFound`].
    pub fn import(&self, dotted: &str) -> Result<Rc<Module>, ImportError> {
        if let Some(module) = self.registered(dotted) {
            debug!(name = dotted, "import served from registry");
            return Ok(module);
        }

        // Clone the chain and path out so no borrow is held while a
        // loader runs; loading may re-enter this method.
        let finders: Vec<Rc<dyn ModuleFinder>> = self.finders.borrow().clone();
        let search_path = self.search_path.borrow().clone();

        for finder in finders {
            if let Some(loader) = finder.find(dotted, &search_path) {
                return loader.load(self, dotted);
            }
        }
        Err(ImportError::ModuleNotFound(dotted.to_string()))
    }
}

impl Importer for ImportContext {
    fn import(&self, dotted: &str) -> EvalResult<Value> {
        let module = ImportContext::import(self, dotted)
            .map_err(|e| EvalError::Import(e.to_string()))?;
        Ok(Value::Module(ModuleValue::new(
            module.name().clone(),
            module.ns().clone(),
        )))
    }
}
