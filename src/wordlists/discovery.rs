//! Word file discovery
//!
//! Finds `.txt` word files in a directory and lets the player pick one when
//! there is more than one.

use crate::commands::console::read_line_lossy;
use crate::error::{HangmanError, Result};
use std::ffi::OsStr;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// List `.txt` files in `dir`, sorted by name, skipping any name in `exclude`
///
/// # Errors
///
/// Returns `HangmanError::DirectoryScan` if the directory cannot be listed.
pub fn find_word_files(dir: &Path, exclude: &[&OsStr]) -> Result<Vec<PathBuf>> {
    let scan_error = |source: std::io::Error| HangmanError::DirectoryScan {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_error)? {
        let path = entry.map_err(scan_error)?.path();

        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        let is_excluded = path
            .file_name()
            .is_some_and(|name| exclude.contains(&name));

        if is_txt && !is_excluded && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!(dir = %dir.display(), found = files.len(), "scanned for word files");
    Ok(files)
}

/// Pick one of `files`
///
/// Returns `None` for an empty list and the only entry for a single-file list
/// without prompting. Otherwise prints a numbered menu on `output` and reads
/// 1-based choices from `input` until one is valid.
///
/// # Errors
///
/// - `HangmanError::NoSelection` if `input` ends before a valid choice
/// - `HangmanError::Io` if the console cannot be read or written
pub fn select_word_file<R: BufRead, W: Write>(
    files: &[PathBuf],
    input: &mut R,
    output: &mut W,
) -> Result<Option<PathBuf>> {
    match files {
        [] => return Ok(None),
        [only] => return Ok(Some(only.clone())),
        _ => {}
    }

    writeln!(output, "Available word files:")?;
    for (i, file) in files.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, display_name(file))?;
    }

    let mut buf = Vec::new();
    loop {
        write!(output, "Choose a word file (1-{}): ", files.len())?;
        output.flush()?;

        let Some(line) = read_line_lossy(input, &mut buf)? else {
            return Err(HangmanError::NoSelection);
        };

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=files.len()).contains(&n) => return Ok(Some(files[n - 1].clone())),
            _ => writeln!(
                output,
                "Please enter a number between 1 and {}.",
                files.len()
            )?,
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "mot\n").unwrap();
    }

    #[test]
    fn find_lists_txt_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.txt");
        touch(dir.path(), "a.txt");
        touch(dir.path(), "notes.md");
        touch(dir.path(), "hangman_drawings.txt");
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        let files = find_word_files(dir.path(), &[OsStr::new("hangman_drawings.txt")]).unwrap();
        let names: Vec<String> = files.iter().map(|p| display_name(p.as_path())).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn find_skips_every_excluded_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "mots.txt");
        touch(dir.path(), "gallows.txt");
        touch(dir.path(), "hangman_drawings.txt");

        let exclude = [OsStr::new("hangman_drawings.txt"), OsStr::new("gallows.txt")];
        let files = find_word_files(dir.path(), &exclude).unwrap();
        assert_eq!(files, vec![dir.path().join("mots.txt")]);
    }

    #[test]
    fn select_survives_non_utf8_line() {
        let files = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
        let mut input = Cursor::new(b"\xe9\n1\n".to_vec());
        let mut output: Vec<u8> = Vec::new();

        let chosen = select_word_file(&files, &mut input, &mut output).unwrap();
        assert_eq!(chosen, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn find_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_word_files(&dir.path().join("nope"), &[]).unwrap_err();
        assert!(matches!(err, HangmanError::DirectoryScan { .. }));
    }

    #[test]
    fn select_none_and_single_without_prompt() {
        let mut input = Cursor::new(Vec::<u8>::new());
        let mut output: Vec<u8> = Vec::new();

        assert_eq!(select_word_file(&[], &mut input, &mut output).unwrap(), None);

        let only = vec![PathBuf::from("mots.txt")];
        assert_eq!(
            select_word_file(&only, &mut input, &mut output).unwrap(),
            Some(PathBuf::from("mots.txt"))
        );
        assert!(output.is_empty());
    }

    #[test]
    fn select_reprompts_until_valid() {
        let files = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
        let mut input = Cursor::new(b"zero\n0\n3\n 2 \n".to_vec());
        let mut output = Vec::new();

        let chosen = select_word_file(&files, &mut input, &mut output).unwrap();
        assert_eq!(chosen, Some(PathBuf::from("b.txt")));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("  1. a.txt"));
        assert!(text.contains("  2. b.txt"));
        assert_eq!(text.matches("Please enter a number").count(), 3);
    }

    #[test]
    fn select_end_of_input_is_no_selection() {
        let files = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
        let mut input = Cursor::new(b"9\n".to_vec());
        let mut output: Vec<u8> = Vec::new();

        let err = select_word_file(&files, &mut input, &mut output).unwrap_err();
        assert!(matches!(err, HangmanError::NoSelection));
    }
}
