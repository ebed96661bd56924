//! Error types
//!
//! Everything that can stop a session before it starts. Wrong guesses are not
//! errors; they are ordinary [`GuessOutcome`](crate::core::GuessOutcome)s.

use std::io;
use std::path::PathBuf;

/// Fatal errors raised while loading game data or talking to the console
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    #[error("cannot open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word file {} contains no words", .path.display())]
    EmptyWordList { path: PathBuf },

    #[error("drawing file {} contains no drawings", .path.display())]
    EmptyDrawingSet { path: PathBuf },

    #[error("cannot list word files in {}: {source}", .path.display())]
    DirectoryScan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no word file was selected")]
    NoSelection,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the library
pub type Result<T, E = HangmanError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_list_mentions_path() {
        let err = HangmanError::EmptyWordList {
            path: PathBuf::from("words.txt"),
        };
        assert_eq!(err.to_string(), "word file words.txt contains no words");
    }

    #[test]
    fn file_open_keeps_source() {
        use std::error::Error;

        let err = HangmanError::FileOpen {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("cannot open missing.txt"));
        assert!(err.source().is_some());
    }
}
