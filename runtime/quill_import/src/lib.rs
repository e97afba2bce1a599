//! Module resolution and import machinery.
//!
//! Turns `import Some.Notebook` statements into live [`Module`] objects.
//! Resolution runs through an ordered chain of finders: a finder maps a
//! dotted name plus the current search path to a loader, and the loader
//! reads the underlying file and executes it against the module's own
//! namespace. Notebook documents (`.qnb`) are tried first, then plain
//! Quill source files (`.ql`).
//!
//! All state lives in an explicit [`ImportContext`] rather than process
//! globals: the module registry, the search path, and the finder chain
//! are owned by the context, and the ambient interactive namespace is
//! owned by the context's [`Shell`](quill_eval::Shell).

mod context;
mod error;
mod finder;
mod loader;
mod locate;
mod module;
mod traits;

pub use context::ImportContext;
pub use error::ImportError;
pub use finder::{NotebookFinder, SourceFinder};
pub use loader::{NotebookLoader, SourceLoader};
pub use locate::{locate_notebook, locate_source, SOURCE_EXT};
pub use module::Module;
pub use traits::{ModuleFinder, ModuleLoader};
