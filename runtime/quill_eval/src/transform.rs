//! Source transforms applied to notebook cell text before parsing.
//!
//! Notebook cells may contain interactive-only syntax that the parser
//! does not accept: `%`-directive lines and a trailing `?` inspection
//! suffix on an expression. [`transform_source`] rewrites such text into
//! plain Quill source, preserving the line count so spans still map back
//! to the original cell.

/// Rewrite interactive cell source into parseable Quill source.
///
/// `%`-directive lines are blanked (not removed) and a trailing `?` on a
/// line is stripped.
pub fn transform_source(source: &str) -> String {
    let mut out = Vec::new();
    for line in source.lines() {
        if line.trim_start().starts_with('%') {
            out.push(String::new());
            continue;
        }
        let trimmed = line.trim_end();
        if let Some(stripped) = trimmed.strip_suffix('?') {
            out.push(stripped.trim_end().to_string());
        } else {
            out.push(line.to_string());
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_source_unchanged() {
        assert_eq!(transform_source("x = 1\ny = 2"), "x = 1\ny = 2");
    }

    #[test]
    fn test_directive_lines_blanked() {
        let src = "%timeit\nx = 1\n  %plot x";
        assert_eq!(transform_source(src), "\nx = 1\n");
    }

    #[test]
    fn test_trailing_question_stripped() {
        assert_eq!(transform_source("x?"), "x");
        assert_eq!(transform_source("x ?  "), "x");
    }

    #[test]
    fn test_line_count_preserved() {
        let src = "%a\nb = 1\n%c";
        assert_eq!(
            transform_source(src).lines().count(),
            src.lines().count()
        );
    }
}
