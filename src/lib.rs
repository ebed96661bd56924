//! Hangman
//!
//! A terminal word-guessing game: find the secret word, one letter or the whole
//! word at a time, before six wrong guesses complete the gallows.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GameStatus, GuessOutcome, SecretWord};
//!
//! // Position 2 starts uncovered
//! let mut game = Game::with_revealed(SecretWord::new("chat").unwrap(), &[2]);
//! assert_eq!(game.revealed().to_string(), "__a_");
//!
//! assert_eq!(game.guess("c"), GuessOutcome::CorrectLetter);
//! assert_eq!(game.guess("chat"), GuessOutcome::CorrectWord);
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Errors shared by every loader
pub mod error;

// Command-line driven session setup
pub mod config;

// Word lists
pub mod wordlists;

// Gallows drawings
pub mod drawings;

// Automatic players
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{HangmanError, Result};
