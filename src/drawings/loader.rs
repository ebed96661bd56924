//! Drawing file loading
//!
//! Consecutive non-blank lines form one stage; a blank line ends it.

use super::DrawingSet;
use crate::error::{HangmanError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a drawing set from a file
///
/// # Errors
///
/// - `HangmanError::FileOpen` if the file cannot be opened
/// - `HangmanError::FileRead` if a line cannot be read
/// - `HangmanError::EmptyDrawingSet` if the file holds only blank lines
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DrawingSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| HangmanError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line.map_err(|source| HangmanError::FileRead {
            path: path.to_path_buf(),
            source,
        })?);
    }

    let set = DrawingSet::new(group_stages(&lines), path)?;
    tracing::info!(path = %path.display(), stages = set.len(), "drawing set loaded");
    Ok(set)
}

/// Group lines into stages separated by blank lines
#[must_use]
pub fn group_stages<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut stages = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines.iter().map(AsRef::as_ref) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                stages.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        stages.push(current.join("\n"));
    }

    stages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn group_splits_on_blank_lines() {
        let stages = group_stages(&["a", "b", "", "c", "   ", "d", "e"]);
        assert_eq!(stages, vec!["a\nb", "c", "d\ne"]);
    }

    #[test]
    fn group_ignores_repeated_and_edge_blank_lines() {
        let stages = group_stages(&["", "", "a", "", "", "", "b", ""]);
        assert_eq!(stages, vec!["a", "b"]);
    }

    #[test]
    fn group_keeps_leading_indentation() {
        let stages = group_stages(&["  ____", "  |  |"]);
        assert_eq!(stages, vec!["  ____\n  |  |"]);
    }

    #[test]
    fn group_empty() {
        let lines: &[&str] = &[];
        assert!(group_stages(lines).is_empty());
    }

    #[test]
    fn load_drawing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b" O\n\n O\n/|\\\n\n O\n/|\\\n/ \\\n").unwrap();

        let set = load_from_file(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.stage(0), " O");
        assert_eq!(set.stage(2), " O\n/|\\\n/ \\");
        assert_eq!(set.stage(9), set.stage(2));
    }

    #[test]
    fn load_blank_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\n   \n\n").unwrap();

        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, HangmanError::EmptyDrawingSet { .. }));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("none.txt")).unwrap_err();
        assert!(matches!(err, HangmanError::FileOpen { .. }));
    }

    #[test]
    fn shipped_drawing_file_matches_builtin() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/hangman_drawings.txt");
        let set = load_from_file(path).unwrap();
        assert_eq!(set, DrawingSet::builtin());
    }
}
