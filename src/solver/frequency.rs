//! Letter-frequency strategy
//!
//! Keeps only the words that agree with everything the board shows, then picks
//! the unused letter hidden in the largest number of them.

use super::Strategy;
use super::strategy::ALPHABET;
use crate::core::{Game, SecretWord, fold_char};
use rustc_hash::{FxHashMap, FxHashSet};

/// Words from `words` that could still be the secret word of `game`
///
/// A word qualifies when it has the right length, agrees with every revealed
/// slot, and has no tried letter under a hidden slot (a tried letter always
/// uncovers all of its occurrences).
#[must_use]
pub fn candidates<'a>(game: &Game, words: &'a [SecretWord]) -> Vec<&'a SecretWord> {
    let slots = game.revealed().slots();
    let used = game.used_letters();

    words
        .iter()
        .filter(|word| word.len() == slots.len())
        .filter(|word| {
            word.folded()
                .iter()
                .zip(slots)
                .all(|(&letter, slot)| match slot {
                    Some(shown) => fold_char(*shown) == letter,
                    None => !used.contains(&letter),
                })
        })
        .collect()
}

/// Pick the letter most likely to uncover something
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_guess(&self, game: &Game, words: &[SecretWord]) -> Option<String> {
        let remaining = candidates(game, words);

        if let [only] = remaining.as_slice() {
            return Some(only.text().to_string());
        }

        let slots = game.revealed().slots();
        let used = game.used_letters();

        // Count each letter once per candidate word
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in &remaining {
            let hidden: FxHashSet<char> = word
                .folded()
                .iter()
                .zip(slots)
                .filter(|(_, slot)| slot.is_none())
                .map(|(&letter, _)| letter)
                .collect();
            for letter in hidden {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        // Highest count first, alphabetical on ties so runs are reproducible
        let best = counts
            .into_iter()
            .filter(|(letter, _)| !used.contains(letter))
            .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then(b.cmp(a)))
            .map(|(letter, _)| letter);

        best.or_else(|| ALPHABET.chars().find(|c| !used.contains(c)))
            .map(String::from)
    }
}
