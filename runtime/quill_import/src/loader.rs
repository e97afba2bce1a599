//! Loaders: materializing modules from resolved files.

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::debug;

use quill_eval::{transform_source, Namespace};
use quill_notebook::Notebook;

use crate::context::ImportContext;
use crate::error::ImportError;
use crate::locate::{locate_notebook, locate_source};
use crate::module::Module;
use crate::traits::ModuleLoader;

/// Loads notebook modules: reads the `.qnb` document and executes its
/// code cells, in order, against the new module's namespace.
pub struct NotebookLoader {
    search_path: Vec<PathBuf>,
}

impl NotebookLoader {
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        NotebookLoader { search_path }
    }
}

impl ModuleLoader for NotebookLoader {
    fn load(self: Rc<Self>, ctx: &ImportContext, dotted: &str) -> Result<Rc<Module>, ImportError> {
        // The finder resolved this name already; relocation must succeed
        // unless the file vanished in between.
        let path = locate_notebook(dotted, &self.search_path)
            .ok_or_else(|| ImportError::SourceVanished(dotted.to_string()))?;
        debug!(name = dotted, path = %path.display(), "loading notebook module");

        let notebook = Notebook::read(&path)?;

        let ns = Namespace::shared();
        let module = Rc::new(Module::new(dotted, path, ns.clone(), self.clone()));

        // Registered before any cell runs, so a cell that imports this
        // module back gets the partially built module instead of
        // recursing. A failed import leaves this entry behind.
        ctx.register(module.clone());

        let shell = ctx.shell();
        let _guard = shell.redirect_user_ns(ns.clone());
        for cell in notebook.code_cells() {
            let source = transform_source(&cell.source.text());
            shell
                .execute(&source, &ns, ctx)
                .map_err(|source| ImportError::Execution {
                    name: dotted.to_string(),
                    source,
                })?;
        }

        Ok(module)
    }
}

/// Loads plain `.ql` source modules: the whole file is executed as one
/// unit against the module's namespace.
pub struct SourceLoader {
    search_path: Vec<PathBuf>,
}

impl SourceLoader {
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        SourceLoader { search_path }
    }
}

impl ModuleLoader for SourceLoader {
    fn load(self: Rc<Self>, ctx: &ImportContext, dotted: &str) -> Result<Rc<Module>, ImportError> {
        let path = locate_source(dotted, &self.search_path)
            .ok_or_else(|| ImportError::SourceVanished(dotted.to_string()))?;
        debug!(name = dotted, path = %path.display(), "loading source module");

        let source = fs::read_to_string(&path).map_err(|source| ImportError::Io {
            path: path.clone(),
            source,
        })?;

        let ns = Namespace::shared();
        let module = Rc::new(Module::new(dotted, path, ns.clone(), self.clone()));
        ctx.register(module.clone());

        let shell = ctx.shell();
        let _guard = shell.redirect_user_ns(ns.clone());
        shell
            .execute(&source, &ns, ctx)
            .map_err(|source| ImportError::Execution {
                name: dotted.to_string(),
                source,
            })?;

        Ok(module)
    }
}
