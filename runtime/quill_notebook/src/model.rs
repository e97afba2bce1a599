//! The notebook document model.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::NotebookError;

/// File extension for Quill notebooks, without the leading dot.
pub const NOTEBOOK_EXT: &str = "qnb";

/// The notebook format version this runtime reads.
pub const FORMAT_VERSION: u32 = 1;

/// What a cell contains.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Quill source to execute.
    Code,
    /// Markdown prose.
    Markdown,
    /// Unrendered text.
    Raw,
}

/// Cell source, stored either as one string or as a list of lines.
///
/// Line-based storage keeps diffs readable; both forms are accepted and
/// [`CellSource::text`] normalizes them.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl CellSource {
    /// The cell's source as one string. Lines are joined as-is: in the
    /// line form each line keeps its own trailing newline, matching how
    /// notebook writers store them.
    pub fn text(&self) -> String {
        match self {
            CellSource::Text(s) => s.clone(),
            CellSource::Lines(lines) => lines.concat(),
        }
    }
}

/// One notebook cell.
#[derive(Clone, Debug, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub source: CellSource,
}

/// A parsed notebook document.
#[derive(Clone, Debug, Deserialize)]
pub struct Notebook {
    /// Format version. Readers reject versions they do not know.
    pub version: u32,
    /// Cells in document order.
    pub cells: Vec<Cell>,
}

impl Notebook {
    /// Parse a notebook from JSON text.
    pub fn parse(json: &str) -> Result<Self, NotebookError> {
        let nb: Notebook = serde_json::from_str(json)?;
        if nb.version != FORMAT_VERSION {
            return Err(NotebookError::UnsupportedVersion {
                found: nb.version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(nb)
    }

    /// Read and parse a notebook file.
    pub fn read(path: &Path) -> Result<Self, NotebookError> {
        let json = fs::read_to_string(path).map_err(|source| NotebookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    /// The code cells, in document order.
    pub fn code_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.kind == CellKind::Code)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_string_source() {
        let nb = Notebook::parse(
            r#"{"version": 1, "cells": [{"kind": "code", "source": "x = 1"}]}"#,
        )
        .unwrap();
        assert_eq!(nb.cells.len(), 1);
        assert_eq!(nb.cells[0].source.text(), "x = 1");
    }

    #[test]
    fn test_parse_line_list_source() {
        let nb = Notebook::parse(
            r#"{"version": 1, "cells": [{"kind": "code", "source": ["x = 1\n", "y = 2"]}]}"#,
        )
        .unwrap();
        assert_eq!(nb.cells[0].source.text(), "x = 1\ny = 2");
    }

    #[test]
    fn test_code_cells_skips_prose() {
        let nb = Notebook::parse(
            r##"{
                "version": 1,
                "cells": [
                    {"kind": "markdown", "source": "# Title"},
                    {"kind": "code", "source": "x = 1"},
                    {"kind": "raw", "source": "notes"},
                    {"kind": "code", "source": "y = 2"}
                ]
            }"##,
        )
        .unwrap();
        let sources: Vec<String> = nb.code_cells().map(|c| c.source.text()).collect();
        assert_eq!(sources, vec!["x = 1".to_string(), "y = 2".to_string()]);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let err = Notebook::parse(r#"{"version": 99, "cells": []}"#).unwrap_err();
        assert!(matches!(
            err,
            NotebookError::UnsupportedVersion { found: 99, .. }
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Notebook::parse("{not json"),
            Err(NotebookError::Malformed(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Notebook::read(&dir.path().join("absent.qnb")).unwrap_err();
        assert!(matches!(err, NotebookError::Io { .. }));
    }
}
