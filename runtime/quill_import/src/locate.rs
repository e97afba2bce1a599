//! Mapping dotted names to files on disk.

use std::path::PathBuf;

use quill_notebook::NOTEBOOK_EXT;

/// File extension for plain Quill source modules, without the leading dot.
pub const SOURCE_EXT: &str = "ql";

/// Locate the notebook for a dotted import name.
///
/// Only the final dot-segment names the file; leading segments are package
/// structure. Each search directory is tried in order (an empty search path
/// means the current directory), and within a directory the literal name is
/// tried before the underscore-to-space fallback, so `import My_Notes` can
/// find a file saved as `My Notes.qnb`. Returns `None` when nothing matches.
pub fn locate_notebook(dotted: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
    let name = final_segment(dotted);
    let spaced = name.replace('_', " ");

    let current_dir = [PathBuf::new()];
    for dir in directories(search_path, &current_dir) {
        let literal = dir.join(format!("{name}.{NOTEBOOK_EXT}"));
        if literal.is_file() {
            return Some(literal);
        }
        if spaced != name {
            let fallback = dir.join(format!("{spaced}.{NOTEBOOK_EXT}"));
            if fallback.is_file() {
                return Some(fallback);
            }
        }
    }
    None
}

/// Locate a plain source file for a dotted import name.
///
/// No underscore fallback here; source modules are named exactly.
pub fn locate_source(dotted: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
    let name = final_segment(dotted);
    let current_dir = [PathBuf::new()];
    for dir in directories(search_path, &current_dir) {
        let candidate = dir.join(format!("{name}.{SOURCE_EXT}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

fn final_segment(dotted: &str) -> &str {
    dotted.rsplit('.').next().unwrap_or(dotted)
}

/// An empty search path means "current directory only".
fn directories<'a>(search_path: &'a [PathBuf], current_dir: &'a [PathBuf; 1]) -> &'a [PathBuf] {
    if search_path.is_empty() {
        current_dir
    } else {
        search_path
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "{\"version\": 1, \"cells\": []}").unwrap();
    }

    #[test]
    fn test_literal_name_preferred() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "Notes.qnb");
        touch(tmp.path(), "My_Data.qnb");
        touch(tmp.path(), "My Data.qnb");

        let path = vec![tmp.path().to_path_buf()];
        assert_eq!(
            locate_notebook("Notes", &path).unwrap(),
            tmp.path().join("Notes.qnb")
        );
        assert_eq!(
            locate_notebook("My_Data", &path).unwrap(),
            tmp.path().join("My_Data.qnb")
        );
    }

    #[test]
    fn test_underscore_to_space_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "Foo Bar.qnb");

        let path = vec![tmp.path().to_path_buf()];
        assert_eq!(
            locate_notebook("Foo_Bar", &path).unwrap(),
            tmp.path().join("Foo Bar.qnb")
        );
    }

    #[test]
    fn test_only_final_segment_matters() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "Notes.qnb");

        let path = vec![tmp.path().to_path_buf()];
        assert_eq!(
            locate_notebook("pkg.analysis.Notes", &path).unwrap(),
            tmp.path().join("Notes.qnb")
        );
    }

    #[test]
    fn test_directories_tried_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        touch(first.path(), "Dup.qnb");
        touch(second.path(), "Dup.qnb");

        let path = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(
            locate_notebook("Dup", &path).unwrap(),
            first.path().join("Dup.qnb")
        );
    }

    #[test]
    fn test_not_found_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let path = vec![tmp.path().to_path_buf()];
        assert!(locate_notebook("Absent", &path).is_none());
        assert!(locate_source("Absent", &path).is_none());
    }

    #[test]
    fn test_source_has_no_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Foo Bar.ql"), "x = 1").unwrap();

        let path = vec![tmp.path().to_path_buf()];
        assert!(locate_source("Foo_Bar", &path).is_none());
    }
}
