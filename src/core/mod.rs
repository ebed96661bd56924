//! Core domain types for hangman
//!
//! This module contains the game rules with no I/O: the secret word, the
//! revealed buffer and the guess evaluator. Everything here is pure and
//! deterministic once a random source has been supplied.

mod board;
mod game;
mod secret;

pub use board::{PLACEHOLDER, RevealedBuffer};
pub use game::{Game, GameStatus, GuessOutcome, LONG_WORD_THRESHOLD, MAX_ERRORS, reveal_count};
pub use secret::{SecretWord, SecretWordError, fold_char};
