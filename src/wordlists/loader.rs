//! Word list loading utilities
//!
//! Word files are plain text: every whitespace-separated token on every line is
//! one candidate word.

use super::WordList;
use crate::core::SecretWord;
use crate::error::{HangmanError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a word list from a file
///
/// # Errors
///
/// - `HangmanError::FileOpen` if the file cannot be opened
/// - `HangmanError::FileRead` if a line cannot be read (including invalid UTF-8)
/// - `HangmanError::EmptyWordList` if the file holds no words
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("hangman.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| HangmanError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tokens = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| HangmanError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        tokens.extend(line.split_whitespace().map(str::to_owned));
    }

    let list = WordList::new(words_from_tokens(tokens), path)?;
    tracing::info!(path = %path.display(), words = list.len(), "word list loaded");
    Ok(list)
}

/// Convert embedded string slice to secret words
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}

fn words_from_tokens(tokens: Vec<String>) -> Vec<SecretWord> {
    tokens
        .into_iter()
        .filter_map(|token| SecretWord::new(token).ok())
        .collect()
}
