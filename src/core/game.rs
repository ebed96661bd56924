//! Game state and guess evaluation
//!
//! A [`Game`] owns everything that changes during a session. Feeding it one line
//! of player input through [`Game::guess`] is the whole rule set:
//!
//! - one character: a letter guess, rejected as `Repeated` if already tried
//! - as many characters as the secret word: a full-word guess
//! - anything else: `InvalidInput`
//!
//! Only letter and word guesses consume a turn; after one of those the session
//! is won when no placeholder remains and lost once the error budget is spent.

use super::{RevealedBuffer, SecretWord, fold_char};
use rand::Rng;
use std::collections::BTreeSet;

/// Wrong guesses allowed before the session is lost
pub const MAX_ERRORS: usize = 6;

/// Words strictly longer than this start with two revealed letters
pub const LONG_WORD_THRESHOLD: usize = 10;

/// Number of positions uncovered when a session starts
#[must_use]
pub const fn reveal_count(word_len: usize) -> usize {
    let count = if word_len > LONG_WORD_THRESHOLD { 2 } else { 1 };
    if count < word_len { count } else { word_len }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// What a single line of input did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    CorrectLetter,
    WrongLetter,
    CorrectWord,
    WrongWord,
    InvalidInput,
    Repeated,
    /// The session was already over; nothing changed
    Finished,
}

impl GuessOutcome {
    /// Whether this outcome used up a turn
    #[must_use]
    pub const fn consumes_turn(self) -> bool {
        matches!(
            self,
            Self::CorrectLetter | Self::WrongLetter | Self::CorrectWord | Self::WrongWord
        )
    }

    /// Whether this outcome cost an error
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::WrongLetter | Self::WrongWord)
    }
}

/// State of one hangman session
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    revealed: RevealedBuffer,
    used_letters: BTreeSet<char>,
    errors: usize,
    status: GameStatus,
}

impl Game {
    /// Start a session, uncovering [`reveal_count`] distinct random positions
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, GameStatus, SecretWord};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let game = Game::new(SecretWord::new("chat").unwrap(), &mut rng);
    ///
    /// assert_eq!(game.revealed().revealed_count(), 1);
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// ```
    pub fn new<R: Rng + ?Sized>(secret: SecretWord, rng: &mut R) -> Self {
        let len = secret.len();
        let positions = rand::seq::index::sample(rng, len, reveal_count(len)).into_vec();
        Self::with_revealed(secret, &positions)
    }

    /// Start a session with the given positions already uncovered
    ///
    /// Positions outside the word are ignored.
    #[must_use]
    pub fn with_revealed(secret: SecretWord, positions: &[usize]) -> Self {
        let mut revealed = RevealedBuffer::new(secret.len());
        for &position in positions.iter().filter(|&&p| p < secret.len()) {
            revealed.reveal(position, secret.char_at(position));
        }

        let status = if revealed.is_complete() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };

        Self {
            secret,
            revealed,
            used_letters: BTreeSet::new(),
            errors: 0,
            status,
        }
    }

    /// Evaluate one line of player input
    ///
    /// Input is trimmed and case-folded before it is classified.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, GuessOutcome, SecretWord};
    ///
    /// let mut game = Game::with_revealed(SecretWord::new("chat").unwrap(), &[2]);
    /// assert_eq!(game.revealed().to_string(), "__a_");
    ///
    /// assert_eq!(game.guess("C"), GuessOutcome::CorrectLetter);
    /// assert_eq!(game.revealed().to_string(), "c_a_");
    /// assert_eq!(game.guess("z"), GuessOutcome::WrongLetter);
    /// assert_eq!(game.errors(), 1);
    /// assert_eq!(game.guess("chat"), GuessOutcome::CorrectWord);
    /// assert!(game.is_over());
    /// ```
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Finished;
        }

        let guess: Vec<char> = input.trim().chars().map(fold_char).collect();

        let outcome = match guess.as_slice() {
            [letter] => self.guess_letter(*letter),
            word if word.len() == self.secret.len() => self.guess_word(word),
            _ => GuessOutcome::InvalidInput,
        };

        match outcome {
            GuessOutcome::CorrectWord => self.status = GameStatus::Won,
            o if o.consumes_turn() => self.update_status(),
            _ => {}
        }

        outcome
    }

    fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if !self.used_letters.insert(letter) {
            return GuessOutcome::Repeated;
        }

        let positions = self.secret.positions_of(letter);
        if positions.is_empty() {
            self.errors += 1;
            return GuessOutcome::WrongLetter;
        }

        for &position in positions {
            self.revealed.reveal(position, self.secret.char_at(position));
        }
        GuessOutcome::CorrectLetter
    }

    fn guess_word(&mut self, word: &[char]) -> GuessOutcome {
        if self.secret.matches_folded(word) {
            for position in 0..self.secret.len() {
                self.revealed.reveal(position, self.secret.char_at(position));
            }
            GuessOutcome::CorrectWord
        } else {
            self.errors += 1;
            GuessOutcome::WrongWord
        }
    }

    fn update_status(&mut self) {
        self.status = if self.revealed.is_complete() {
            GameStatus::Won
        } else if self.errors >= MAX_ERRORS {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &RevealedBuffer {
        &self.revealed
    }

    /// Letters tried so far, in sorted order
    #[inline]
    #[must_use]
    pub fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    /// Tried letters that are not in the secret word
    pub fn wrong_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.used_letters
            .iter()
            .copied()
            .filter(|&c| !self.secret.has_letter(c))
    }

    #[inline]
    #[must_use]
    pub fn errors(&self) -> usize {
        self.errors
    }

    #[inline]
    #[must_use]
    pub fn remaining_errors(&self) -> usize {
        MAX_ERRORS.saturating_sub(self.errors)
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }
}
