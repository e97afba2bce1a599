//! Finders: resolution plus per-search-path loader caching.

use std::borrow::Cow;
use std::cell::RefCell;
use std::path::{PathBuf, MAIN_SEPARATOR_STR};
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::loader::{NotebookLoader, SourceLoader};
use crate::locate::{locate_notebook, locate_source};
use crate::traits::{ModuleFinder, ModuleLoader};

/// Cache key for an empty search path, distinct from any real directory.
const NO_PATH_KEY: &str = "<no-path>";

fn loader_cache_key(search_path: &[PathBuf]) -> String {
    if search_path.is_empty() {
        return NO_PATH_KEY.to_string();
    }
    // Lossy conversion keeps distinct non-UTF-8 directories on distinct keys
    let parts: Vec<Cow<'_, str>> = search_path.iter().map(|p| p.to_string_lossy()).collect();
    parts.join(MAIN_SEPARATOR_STR)
}

/// Resolves dotted names to notebook files.
///
/// Loaders are cached per search-path identity: two resolutions under the
/// same directories, in the same order, reuse one loader instance.
#[derive(Default)]
pub struct NotebookFinder {
    loaders: RefCell<FxHashMap<String, Rc<NotebookLoader>>>,
}

impl NotebookFinder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModuleFinder for NotebookFinder {
    fn find(&self, dotted: &str, search_path: &[PathBuf]) -> Option<Rc<dyn ModuleLoader>> {
        let path = locate_notebook(dotted, search_path)?;
        debug!(name = dotted, path = %path.display(), "resolved notebook import");

        let key = loader_cache_key(search_path);
        let loader = self
            .loaders
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| Rc::new(NotebookLoader::new(search_path.to_vec())))
            .clone();
        Some(loader)
    }
}

/// Resolves dotted names to plain `.ql` source files. Sits after
/// [`NotebookFinder`] in the chain, so notebooks win when both exist.
#[derive(Default)]
pub struct SourceFinder {
    loaders: RefCell<FxHashMap<String, Rc<SourceLoader>>>,
}

impl SourceFinder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModuleFinder for SourceFinder {
    fn find(&self, dotted: &str, search_path: &[PathBuf]) -> Option<Rc<dyn ModuleLoader>> {
        let path = locate_source(dotted, search_path)?;
        debug!(name = dotted, path = %path.display(), "resolved source import");

        let key = loader_cache_key(search_path);
        let loader = self
            .loaders
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| Rc::new(SourceLoader::new(search_path.to_vec())))
            .clone();
        Some(loader)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use std::fs;

    use super::*;

    fn notebook_in(dir: &std::path::Path, name: &str) {
        fs::write(
            dir.join(name),
            r#"{"version": 1, "cells": [{"kind": "code", "source": "x = 1"}]}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_same_search_path_reuses_loader() {
        let tmp = tempfile::tempdir().unwrap();
        notebook_in(tmp.path(), "A.qnb");
        notebook_in(tmp.path(), "B.qnb");

        let finder = NotebookFinder::new();
        let path = vec![tmp.path().to_path_buf()];
        let first = finder.find("A", &path).unwrap();
        let second = finder.find("B", &path).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_search_paths_get_distinct_loaders() {
        let one = tempfile::tempdir().unwrap();
        let two = tempfile::tempdir().unwrap();
        notebook_in(one.path(), "A.qnb");
        notebook_in(two.path(), "A.qnb");

        let finder = NotebookFinder::new();
        let first = finder.find("A", &[one.path().to_path_buf()]).unwrap();
        let second = finder.find("A", &[two.path().to_path_buf()]).unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unresolvable_name_declines() {
        let tmp = tempfile::tempdir().unwrap();
        let finder = NotebookFinder::new();
        assert!(finder.find("Absent", &[tmp.path().to_path_buf()]).is_none());
        assert!(finder.loaders.borrow().is_empty());
    }

    #[test]
    fn test_empty_path_uses_sentinel_key() {
        assert_eq!(loader_cache_key(&[]), NO_PATH_KEY);
        assert_ne!(loader_cache_key(&[PathBuf::from("a")]), NO_PATH_KEY);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_keep_distinct_keys() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let one = PathBuf::from(OsStr::from_bytes(b"\xff/one"));
        let two = PathBuf::from(OsStr::from_bytes(b"\xff/two"));

        let key_one = loader_cache_key(&[one]);
        let key_two = loader_cache_key(&[two]);
        assert_ne!(key_one, key_two);
        assert_ne!(key_one, NO_PATH_KEY);
    }
}
