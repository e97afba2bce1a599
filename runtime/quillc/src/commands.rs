//! CLI command implementations.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use quill_eval::{EvalError, Shell, Value};
use quill_import::{ImportContext, ImportError};

/// Errors surfaced to the CLI user.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Import(#[from] ImportError),
}

fn new_context(extra_paths: &[PathBuf]) -> ImportContext {
    let ctx = ImportContext::new(Rc::new(Shell::new()));
    for dir in extra_paths {
        ctx.add_search_path(dir.clone());
    }
    ctx
}

/// Execute a script file. The script's own directory is consulted first
/// when its `import` statements resolve, then any `--path` directories.
///
/// Returns the value of the script's last bare expression.
pub fn run_script(path: &Path, extra_paths: &[PathBuf]) -> Result<Value, CommandError> {
    let source = fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let ctx = new_context(extra_paths);
    if let Some(dir) = path.parent() {
        ctx.prepend_search_path(dir.to_path_buf());
    }
    debug!(script = %path.display(), "running script");

    let shell = ctx.shell().clone();
    let ns = shell.user_ns();
    Ok(shell.execute(&source, &ns, &ctx)?)
}

/// Import a module by dotted name and return its bindings as
/// `name = value` lines, sorted by name.
pub fn import_module(dotted: &str, extra_paths: &[PathBuf]) -> Result<Vec<String>, CommandError> {
    let ctx = new_context(extra_paths);
    let module = ctx.import(dotted)?;

    let interner = ctx.shell().interner();
    let mut lines: Vec<String> = module
        .ns()
        .borrow()
        .iter()
        .map(|(name, value)| format!("{} = {value}", interner.lookup(name)))
        .collect();
    lines.sort();
    Ok(lines)
}
