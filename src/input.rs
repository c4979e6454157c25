use std::fs;
use std::path::Path;

use crate::error::{PuzzleError, Result};

/// Reads the whole file with surrounding blank lines and trailing whitespace
/// removed. The first line keeps its indentation, which day 19's maze needs.
pub fn read_trimmed(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map(|s| trim_blank(&s).to_owned())
        .map_err(|source| PuzzleError::Io {path: path.to_owned(), source})
}

fn trim_blank(text: &str) -> &str {
    let text = text.trim_end();
    let indent = text.len() - text.trim_start().len();
    let start = text[.. indent].rfind('\n').map_or(0, |newline| newline + 1);
    &text[start ..]
}

/// The non-empty lines of a puzzle input, each trimmed.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day7.in");
        fs::write(&path, "  pbga (66)\n\n   xhth (57)  \n\n").unwrap();
        assert_eq!(read_trimmed(&path).unwrap(), "  pbga (66)\n\n   xhth (57)");
    }

    #[test]
    fn keeps_first_line_indent() {
        assert_eq!(trim_blank("\n  \n     |  \n  A  \n\n"), "     |  \n  A");
        assert_eq!(trim_blank(" \r\n1122\r\n"), "1122");
        assert_eq!(trim_blank("  \n "), "");
    }

    #[test]
    fn skips_blank_lines() {
        assert_eq!(lines("  pbga (66)\n\n   xhth (57)  \r\n \n").collect::<Vec<_>>(), vec!["pbga (66)", "xhth (57)"]);
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day99.in");
        let err = read_trimmed(&path).unwrap_err();
        assert!(matches!(err, PuzzleError::Io {..}));
        assert!(err.to_string().contains("day99.in"));
    }
}
