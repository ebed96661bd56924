//! Word lists for hangman
//!
//! A [`WordList`] is loaded once per run, either from a word file or from the
//! list embedded in the binary, and never changes afterwards.

pub mod discovery;
mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use crate::error::{HangmanError, Result};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Label used as the origin of the embedded list
pub const EMBEDDED_ORIGIN: &str = "<embedded>";

/// Non-empty, immutable list of candidate secret words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<SecretWord>,
    origin: PathBuf,
}

impl WordList {
    /// Wrap loaded words
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<SecretWord>, origin: impl Into<PathBuf>) -> Result<Self> {
        let origin = origin.into();
        if words.is_empty() {
            return Err(HangmanError::EmptyWordList { path: origin });
        }
        Ok(Self { words, origin })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::EmptyWordList` if the build embedded no words.
    pub fn embedded() -> Result<Self> {
        Self::new(loader::words_from_slice(WORDS), EMBEDDED_ORIGIN)
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// File the words came from, or [`EMBEDDED_ORIGIN`]
    #[must_use]
    pub fn origin(&self) -> &Path {
        &self.origin
    }
}
