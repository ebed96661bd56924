//! Hangman drawings
//!
//! A [`DrawingSet`] is an ordered list of ASCII-art stages, indexed by the
//! current error count. Sets come from a drawing file or the built-in stages.

mod builtin;
pub mod loader;

pub use builtin::STAGES;

use crate::error::{HangmanError, Result};
use std::path::Path;

/// Conventional name of the drawing file, never offered as a word file
pub const DRAWINGS_FILE: &str = "hangman_drawings.txt";

/// Ordered, non-empty list of gallows stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingSet {
    stages: Vec<String>,
}

impl DrawingSet {
    /// Wrap parsed stages
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::EmptyDrawingSet` if `stages` is empty.
    pub fn new(stages: Vec<String>, origin: &Path) -> Result<Self> {
        if stages.is_empty() {
            return Err(HangmanError::EmptyDrawingSet {
                path: origin.to_path_buf(),
            });
        }
        Ok(Self { stages })
    }

    /// The seven built-in stages
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            stages: STAGES.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// Stage for `errors`, clamped to the last one
    ///
    /// # Examples
    /// ```
    /// use hangman::drawings::DrawingSet;
    ///
    /// let set = DrawingSet::builtin();
    /// assert_eq!(set.stage(42), set.stage(6));
    /// ```
    #[must_use]
    pub fn stage(&self, errors: usize) -> &str {
        let index = errors.min(self.stages.len() - 1);
        &self.stages[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for DrawingSet {
    fn default() -> Self {
        Self::builtin()
    }
}
