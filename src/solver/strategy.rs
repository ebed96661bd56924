//! Guess selection strategies
//!
//! Defines the Strategy trait and the simple concrete implementations.

use super::FrequencyStrategy;
use crate::core::{Game, SecretWord};

/// Letters in the order [`AlphabetStrategy`] tries them
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A strategy for choosing the next line to type
pub trait Strategy: Sync {
    /// Choose the next guess for `game`, knowing the full word list
    ///
    /// Returns `None` when the strategy has nothing left to try.
    fn next_guess(&self, game: &Game, words: &[SecretWord]) -> Option<String>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most frequent letter among the remaining candidates (default)
    Frequency(FrequencyStrategy),
    /// Letters in alphabetical order, ignoring the word list
    Alphabet(AlphabetStrategy),
}

impl Strategy for StrategyType {
    fn next_guess(&self, game: &Game, words: &[SecretWord]) -> Option<String> {
        match self {
            Self::Frequency(s) => s.next_guess(game, words),
            Self::Alphabet(s) => s.next_guess(game, words),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "alphabet".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabet" | "alpha" => Self::Alphabet(AlphabetStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// Baseline strategy: the first unused letter of the alphabet
pub struct AlphabetStrategy;

impl Strategy for AlphabetStrategy {
    fn next_guess(&self, game: &Game, _words: &[SecretWord]) -> Option<String> {
        ALPHABET
            .chars()
            .find(|c| !game.used_letters().contains(c))
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> Game {
        Game::with_revealed(SecretWord::new(word).unwrap(), &[0])
    }

    #[test]
    fn alphabet_strategy_skips_used_letters() {
        let mut game = game("zoo");
        assert_eq!(AlphabetStrategy.next_guess(&game, &[]), Some("a".to_string()));

        game.guess("a");
        game.guess("b");
        assert_eq!(AlphabetStrategy.next_guess(&game, &[]), Some("c".to_string()));
    }

    #[test]
    fn alphabet_strategy_continues_after_misses() {
        let mut game = Game::with_revealed(SecretWord::new("éé").unwrap(), &[0]);
        for letter in ALPHABET.chars().take(5) {
            game.guess(&letter.to_string());
        }
        assert_eq!(AlphabetStrategy.next_guess(&game, &[]), Some("f".to_string()));
    }

    #[test]
    fn from_name_defaults_to_frequency() {
        assert!(matches!(
            StrategyType::from_name("frequency"),
            StrategyType::Frequency(_)
        ));
        assert!(matches!(
            StrategyType::from_name("unknown"),
            StrategyType::Frequency(_)
        ));
        assert!(matches!(
            StrategyType::from_name("alphabet"),
            StrategyType::Alphabet(_)
        ));
    }
}
