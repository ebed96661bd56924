//! Secret word representation
//!
//! A `SecretWord` keeps the word as it appeared in the word file (for display)
//! next to a case-folded copy used for every comparison.

use rustc_hash::FxHashMap;
use std::fmt;

/// Fold a character to the form used for matching
///
/// Characters whose lowercase form expands to several characters keep only the
/// first one, so a folded word always has the same length as the original.
#[inline]
#[must_use]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// The word the player has to find
///
/// Length is measured in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    original: Vec<char>,
    folded: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for unusable secret words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SecretWordError {
    #[error("Secret word must not be empty")]
    Empty,
    #[error("Secret word must not contain whitespace")]
    ContainsWhitespace,
}

impl SecretWord {
    /// Create a secret word
    ///
    /// # Errors
    /// Returns `SecretWordError` if the text is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Chat").unwrap();
    /// assert_eq!(word.text(), "Chat");
    /// assert_eq!(word.positions_of('c'), &[0]);
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SecretWordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(SecretWordError::Empty);
        }
        if text.chars().any(char::is_whitespace) {
            return Err(SecretWordError::ContainsWhitespace);
        }

        let original: Vec<char> = text.chars().collect();
        let folded: Vec<char> = original.iter().copied().map(fold_char).collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in folded.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            original,
            folded,
            char_positions,
        })
    }

    /// The word as written in the word file
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Original character at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.original[position]
    }

    /// Case-folded characters
    #[inline]
    #[must_use]
    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    /// Check if the word contains a folded letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// All positions where a folded letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Distinct folded letters of the word
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.char_positions.keys().copied()
    }

    /// Compare an already folded guess against the word
    #[must_use]
    pub fn matches_folded(&self, guess: &[char]) -> bool {
        self.folded == guess
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
