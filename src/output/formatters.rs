//! Formatting utilities for terminal output

use crate::core::{Game, GuessOutcome, MAX_ERRORS};

/// Player-facing message for a guess outcome
///
/// `CorrectWord` has no message of its own: the victory banner follows.
#[must_use]
pub const fn outcome_message(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::CorrectLetter => "Good letter!",
        GuessOutcome::WrongLetter => "That letter is not in the word.",
        GuessOutcome::CorrectWord => "",
        GuessOutcome::WrongWord => "That is not the right word.",
        GuessOutcome::InvalidInput => "Please enter either a single letter or the whole word.",
        GuessOutcome::Repeated => "You already tried that letter.",
        GuessOutcome::Finished => "The game is over.",
    }
}

/// Used letters in sorted order, comma separated
#[must_use]
pub fn format_used_letters(game: &Game) -> String {
    game.used_letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One block per error still allowed
#[must_use]
pub fn lives_bar(game: &Game) -> String {
    create_progress_bar(game.remaining_errors() as f64, MAX_ERRORS as f64, MAX_ERRORS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    fn chat() -> Game {
        Game::with_revealed(SecretWord::new("chat").unwrap(), &[2])
    }

    #[test]
    fn used_letters_sorted() {
        let mut game = chat();
        for letter in ["z", "c", "b"] {
            game.guess(letter);
        }
        assert_eq!(format_used_letters(&game), "b, c, z");
    }

    #[test]
    fn used_letters_empty() {
        assert_eq!(format_used_letters(&chat()), "");
    }

    #[test]
    fn lives_bar_shrinks_with_errors() {
        let mut game = chat();
        assert_eq!(lives_bar(&game), "██████");
        game.guess("z");
        game.guess("y");
        assert_eq!(lives_bar(&game), "████░░");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn every_rejected_outcome_has_a_message() {
        for outcome in [
            GuessOutcome::CorrectLetter,
            GuessOutcome::WrongLetter,
            GuessOutcome::WrongWord,
            GuessOutcome::InvalidInput,
            GuessOutcome::Repeated,
            GuessOutcome::Finished,
        ] {
            assert!(!outcome_message(outcome).is_empty());
        }
    }
}
